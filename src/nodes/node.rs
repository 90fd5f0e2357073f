//! Node types and core node functionality

use super::terminal::{TerminalId, TerminalRole};
use crate::constants;
use crate::editor::InteractionController;
use crate::scene::{Scene, ShapeId, ShapeOwner};
use crate::theme;
use egui::{Color32, Pos2, Rect, Vec2};

/// Unique identifier for a node
pub type NodeId = usize;

/// Colors a node paints itself and its terminals with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub body: Color32,
    pub terminal: Color32,
    pub active_terminal: Color32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        let colors = theme::colors();
        Self {
            body: colors.node_body,
            terminal: colors.terminal_idle,
            active_terminal: colors.terminal_active,
        }
    }
}

/// A body rectangle with input terminals down its left edge and output
/// terminals down its right edge.
///
/// The node owns its shapes and terminals; moving it moves all of them
/// together.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    position: Pos2,
    size: Vec2,
    body: ShapeId,
    inputs: Vec<TerminalId>,
    outputs: Vec<TerminalId>,
    style: NodeStyle,
}

impl Node {
    /// Body height for a node with the given terminal counts
    pub fn height_for(num_inputs: usize, num_outputs: usize) -> f32 {
        constants::terminal::SPACING * (num_inputs.max(num_outputs) + 1) as f32
    }

    /// Vertical offset of terminal `index` from the node's top edge
    pub fn terminal_offset(index: usize) -> f32 {
        constants::terminal::SPACING * (index + 1) as f32
    }

    /// Builds a node with its top-left corner at `position`.
    ///
    /// Every terminal circle is wrapped in a [`Terminal`](super::Terminal)
    /// registered with `controller`.
    pub fn new(
        id: NodeId,
        position: Pos2,
        num_inputs: usize,
        num_outputs: usize,
        style: NodeStyle,
        controller: &mut InteractionController,
        scene: &mut Scene,
    ) -> Self {
        let size = Vec2::new(constants::node::WIDTH, Self::height_for(num_inputs, num_outputs));
        let body = scene.add_rect(Rect::from_min_size(position, size), style.body);
        scene.bind(body, ShapeOwner::NodeBody(id));

        let mut add_side = |count: usize, x: f32, role: TerminalRole| -> Vec<TerminalId> {
            (0..count)
                .map(|i| {
                    let center = position + Vec2::new(x, Self::terminal_offset(i));
                    let point = scene.add_circle(center, constants::terminal::RADIUS, style.terminal);
                    let terminal = controller.register_terminal(scene, point, role);
                    if let Ok(registered) = controller.terminal_mut(terminal) {
                        registered.set_node(id);
                        registered.set_idle_color(style.terminal);
                        registered.set_active_color(style.active_terminal);
                    }
                    terminal
                })
                .collect()
        };

        let inputs = add_side(num_inputs, 0.0, TerminalRole::Input);
        let outputs = add_side(num_outputs, size.x, TerminalRole::Output);

        Self {
            id,
            position,
            size,
            body,
            inputs,
            outputs,
            style,
        }
    }

    /// Top-left corner of the body
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Returns the bounding rectangle of the body
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub fn body(&self) -> ShapeId {
        self.body
    }

    pub fn inputs(&self) -> &[TerminalId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TerminalId] {
        &self.outputs
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Inputs followed by outputs
    pub fn terminals(&self) -> impl Iterator<Item = TerminalId> + '_ {
        self.inputs.iter().chain(self.outputs.iter()).copied()
    }

    pub fn style(&self) -> NodeStyle {
        self.style
    }

    /// Moves the node so its top-left corner sits at `position`
    pub fn set_position(&mut self, position: Pos2, controller: &InteractionController, scene: &mut Scene) {
        self.translate(position - self.position, controller, scene);
    }

    /// Moves the body and every terminal by `delta`.
    ///
    /// Rubber bands started from this node's terminals keep their origin on
    /// the terminal. Committed connection lines follow on the next refresh.
    pub fn translate(&mut self, delta: Vec2, controller: &InteractionController, scene: &mut Scene) {
        if delta == Vec2::ZERO {
            return;
        }
        self.position += delta;
        scene.translate(self.body, delta);

        for id in self.terminals() {
            let Ok(terminal) = controller.terminal(id) else {
                continue;
            };
            scene.translate(terminal.point(), delta);
            if let Some(line) = terminal.rubber_band() {
                if let Some((start, _)) = scene.line(line) {
                    scene.set_line_start(line, start + delta);
                }
            }
        }
    }

    /// Repaints the body
    pub fn set_body_color(&mut self, color: Color32, scene: &mut Scene) {
        self.style.body = color;
        scene.set_fill(self.body, color);
    }

    /// Repaints every terminal circle and makes `color` their idle color
    pub fn set_terminal_color(&mut self, color: Color32, controller: &mut InteractionController, scene: &mut Scene) {
        self.style.terminal = color;
        for id in self.terminals() {
            if let Ok(terminal) = controller.terminal_mut(id) {
                terminal.set_idle_color(color);
                scene.set_fill(terminal.point(), color);
            }
        }
    }

    /// Changes the highlight color used from the next refresh on
    pub fn set_active_terminal_color(&mut self, color: Color32, controller: &mut InteractionController) {
        self.style.active_terminal = color;
        for id in self.terminals() {
            if let Ok(terminal) = controller.terminal_mut(id) {
                terminal.set_active_color(color);
            }
        }
    }
}

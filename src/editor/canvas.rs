//! Editor session: scene, terminals, nodes and pointer dispatch

use super::interaction::InteractionController;
use crate::constants::{canvas as layout, startup, terminal};
use crate::error::{EditorError, Result};
use crate::nodes::{ConnectionId, Node, NodeId, NodeStyle, TerminalId, TerminalRole};
use crate::scene::{Scene, ShapeId, ShapeOwner};
use crate::theme;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::{debug, info};

/// Everything one editor window works on.
///
/// Raw pointer input goes in through `pointer_*`, and [`tick`](Self::tick)
/// runs once per frame after that frame's events.
#[derive(Debug, Clone)]
pub struct Canvas {
    scene: Scene,
    controller: InteractionController,
    nodes: Vec<Node>,
    size: Vec2,
    frame: ShapeId,
    new_node_button: ShapeId,
    spawn_center: Pos2,
    // Pointer tracking
    pressed: Option<ShapeOwner>,
    hovered: Option<ShapeOwner>,
    last_pointer: Option<Pos2>,
}

impl Canvas {
    /// Creates the startup canvas: the new-node control, the padding frame,
    /// a starting node and the standalone output terminals along the frame.
    pub fn new(size: Vec2) -> Self {
        let mut canvas = Self::blank(size);

        let first = canvas.add_node(
            Pos2::from(startup::FIRST_NODE_POSITION),
            startup::NUM_INPUTS,
            startup::NUM_OUTPUTS,
        );
        let node_size = canvas.nodes[first].size();
        canvas.spawn_center = padding().to_pos2() + node_size * 0.5 + nudge();
        let top_left = canvas.spawn_center - node_size * 0.5;
        canvas.nodes[first].set_position(top_left, &canvas.controller, &mut canvas.scene);

        let idle = theme::colors().terminal_idle;
        for i in 0..startup::NUM_ENVIRONMENT_TERMINALS {
            let center = padding().to_pos2()
                + Vec2::new(0.0, startup::ENVIRONMENT_TERMINAL_SPACING * (i + 1) as f32);
            let point = canvas.scene.add_circle(center, terminal::RADIUS, idle);
            canvas
                .controller
                .register_terminal(&mut canvas.scene, point, TerminalRole::Output);
        }

        info!(
            "Canvas ready: {} node(s), {} terminal(s)",
            canvas.nodes.len(),
            canvas.controller.terminals().len()
        );
        canvas
    }

    /// Creates a canvas holding only the new-node control and the padding frame
    pub fn blank(size: Vec2) -> Self {
        let colors = theme::colors();
        let dimensions = theme::dimensions();
        let mut scene = Scene::new();

        let new_node_button = scene.add_rect(
            Rect::from_min_size(Pos2::ZERO, Vec2::from(layout::NEW_NODE_BUTTON_SIZE)),
            colors.frame,
        );
        scene.set_label(new_node_button, "New node");
        scene.bind(new_node_button, ShapeOwner::NewNodeButton);

        let frame = scene.add_outline(
            frame_rect(size),
            Stroke::new(dimensions.frame_stroke_width, colors.frame),
        );

        Self {
            scene,
            controller: InteractionController::new(),
            nodes: Vec::new(),
            size,
            frame,
            new_node_button,
            spawn_center: padding().to_pos2(),
            pressed: None,
            hovered: None,
            last_pointer: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(EditorError::UnknownNode(id))
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn frame(&self) -> ShapeId {
        self.frame
    }

    pub fn new_node_button(&self) -> ShapeId {
        self.new_node_button
    }

    /// Component currently under the pointer
    pub fn hovered(&self) -> Option<ShapeOwner> {
        self.hovered
    }

    /// Component the current press started on
    pub fn pressed(&self) -> Option<ShapeOwner> {
        self.pressed
    }

    /// Center of a terminal's circle
    pub fn terminal_position(&self, id: TerminalId) -> Result<Pos2> {
        let terminal = self.controller.terminal(id)?;
        self.scene
            .center(terminal.point())
            .ok_or(EditorError::UnknownTerminal(id))
    }

    /// Current fill of a terminal's circle
    pub fn terminal_color(&self, id: TerminalId) -> Result<Color32> {
        let terminal = self.controller.terminal(id)?;
        self.scene
            .fill(terminal.point())
            .ok_or(EditorError::UnknownTerminal(id))
    }

    /// Endpoints of a committed connection's line
    pub fn connection_line(&self, id: ConnectionId) -> Option<(Pos2, Pos2)> {
        let connection = self.controller.connections().get(id)?;
        self.scene.line(connection.line)
    }

    /// Adds a node with the theme's colors and its top-left corner at `position`
    pub fn add_node(&mut self, position: Pos2, num_inputs: usize, num_outputs: usize) -> NodeId {
        let id = self.nodes.len();
        let node = Node::new(
            id,
            position,
            num_inputs,
            num_outputs,
            NodeStyle::default(),
            &mut self.controller,
            &mut self.scene,
        );
        self.nodes.push(node);
        debug!(
            "Added node {} at ({:.0}, {:.0}) with {} input(s), {} output(s)",
            id, position.x, position.y, num_inputs, num_outputs
        );
        id
    }

    /// Adds a default node at the next cascading spawn point
    pub fn spawn_node(&mut self) -> NodeId {
        self.spawn_center += padding() * 0.5 + nudge();
        let size = Vec2::new(
            crate::constants::node::WIDTH,
            Node::height_for(startup::NUM_INPUTS, startup::NUM_OUTPUTS),
        );
        self.add_node(
            self.spawn_center - size * 0.5,
            startup::NUM_INPUTS,
            startup::NUM_OUTPUTS,
        )
    }

    /// Translates a node as a whole
    pub fn move_node(&mut self, id: NodeId, delta: Vec2) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.translate(delta, &self.controller, &mut self.scene);
        Ok(())
    }

    /// Places a node's top-left corner at `position`
    pub fn move_node_to(&mut self, id: NodeId, position: Pos2) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.set_position(position, &self.controller, &mut self.scene);
        Ok(())
    }

    pub fn set_node_body_color(&mut self, id: NodeId, color: Color32) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.set_body_color(color, &mut self.scene);
        Ok(())
    }

    pub fn set_node_terminal_color(&mut self, id: NodeId, color: Color32) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.set_terminal_color(color, &mut self.controller, &mut self.scene);
        Ok(())
    }

    pub fn set_node_active_terminal_color(&mut self, id: NodeId, color: Color32) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(EditorError::UnknownNode(id))?;
        node.set_active_terminal_color(color, &mut self.controller);
        Ok(())
    }

    /// Canvas size changed; keeps the padding frame inset from the edges
    pub fn resize(&mut self, size: Vec2) {
        if size == self.size {
            return;
        }
        debug!("Canvas resized to {:.0}x{:.0}", size.x, size.y);
        self.size = size;
        self.scene.set_rect(self.frame, frame_rect(size));
    }

    /// Primary button went down at `pos`
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        self.last_pointer = Some(pos);
        self.update_hover(pos);
        self.pressed = self.scene.hit_test(pos);

        if self.pressed == Some(ShapeOwner::NewNodeButton) {
            let id = self.spawn_node();
            info!("Created node {} from the new-node control", id);
        }
    }

    /// Pointer moved to `pos`; drags whatever the press started on
    pub fn pointer_moved(&mut self, pos: Pos2) {
        let delta = self.last_pointer.map_or(Vec2::ZERO, |last| pos - last);
        self.last_pointer = Some(pos);

        if let Some(target) = self.pressed {
            self.drag(target, pos, delta);
        }
        self.update_hover(pos);
    }

    /// Primary button went up at `pos`
    pub fn pointer_released(&mut self, pos: Pos2) {
        self.last_pointer = Some(pos);
        let target = self.pressed.take();
        let under = self.scene.hit_test(pos);

        if let Some(target) = target {
            self.pointer_up(target);
        }
        if let Some(under) = under.filter(|&under| Some(under) != target) {
            self.pointer_up(under);
        }
    }

    /// Pointer left the canvas
    pub fn pointer_left(&mut self) {
        self.hovered = None;
    }

    /// Per-frame refresh of connection lines and terminal colors
    pub fn tick(&mut self) {
        self.controller.refresh(&mut self.scene);
    }

    fn update_hover(&mut self, pos: Pos2) {
        let hit = self.scene.hit_test(pos);
        if hit == self.hovered {
            return;
        }
        self.hovered = hit;

        if let Some(ShapeOwner::Terminal(id)) = hit {
            self.controller.hover_commit(&mut self.scene, id);
        }
    }

    fn drag(&mut self, target: ShapeOwner, pos: Pos2, delta: Vec2) {
        match target {
            ShapeOwner::Terminal(id) => self.controller.begin_drag(&mut self.scene, id, pos),
            ShapeOwner::NodeBody(id) => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.translate(delta, &self.controller, &mut self.scene);
                }
            }
            ShapeOwner::NewNodeButton => {}
        }
    }

    fn pointer_up(&mut self, target: ShapeOwner) {
        if let ShapeOwner::Terminal(id) = target {
            self.controller.end_drag(&mut self.scene, id);
        }
    }
}

fn padding() -> Vec2 {
    Vec2::new(layout::PADDING_X, layout::PADDING_Y)
}

fn nudge() -> Vec2 {
    Vec2::splat(startup::PLACEMENT_NUDGE)
}

fn frame_rect(size: Vec2) -> Rect {
    let inner = (size - padding() * 2.0).max(Vec2::ZERO);
    Rect::from_min_size(padding().to_pos2(), inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::blank(Vec2::from(layout::DEFAULT_SIZE))
    }

    #[test]
    fn test_startup_layout() {
        let canvas = Canvas::new(Vec2::from(layout::DEFAULT_SIZE));

        assert_eq!(canvas.nodes().len(), 1);
        let node = &canvas.nodes()[0];
        assert_eq!(node.position(), Pos2::new(150.0, 125.0));
        assert_eq!((node.num_inputs(), node.num_outputs()), (2, 1));
        assert_eq!(
            canvas.controller().terminals().len(),
            3 + startup::NUM_ENVIRONMENT_TERMINALS
        );

        let standalone = canvas.controller().terminals().last().unwrap();
        assert!(standalone.is_output());
        assert_eq!(standalone.node(), None);
        assert_eq!(
            canvas.terminal_position(standalone.id).unwrap(),
            Pos2::new(100.0, 75.0 + 100.0 * startup::NUM_ENVIRONMENT_TERMINALS as f32)
        );
    }

    #[test]
    fn test_new_node_control_cascades() {
        let mut canvas = Canvas::new(Vec2::from(layout::DEFAULT_SIZE));
        let first = canvas.nodes()[0].position();

        canvas.pointer_pressed(Pos2::new(20.0, 20.0));
        canvas.pointer_released(Pos2::new(20.0, 20.0));
        canvas.pointer_pressed(Pos2::new(20.0, 20.0));
        canvas.pointer_released(Pos2::new(20.0, 20.0));

        assert_eq!(canvas.nodes().len(), 3);
        let step = Vec2::new(100.0, 87.5);
        assert_eq!(canvas.nodes()[1].position(), first + step);
        assert_eq!(canvas.nodes()[2].position(), first + step * 2.0);
    }

    #[test]
    fn test_resize_moves_frame() {
        let mut canvas = canvas();
        canvas.resize(Vec2::new(1000.0, 500.0));

        let rect = canvas.scene().rect(canvas.frame()).unwrap();
        assert_eq!(rect, Rect::from_min_size(Pos2::new(100.0, 75.0), Vec2::new(800.0, 350.0)));

        canvas.resize(Vec2::new(50.0, 50.0));
        let rect = canvas.scene().rect(canvas.frame()).unwrap();
        assert_eq!(rect.size(), Vec2::ZERO);
    }

    #[test]
    fn test_body_drag_moves_node() {
        let mut canvas = canvas();
        let id = canvas.add_node(Pos2::new(300.0, 100.0), 1, 1);

        canvas.pointer_pressed(Pos2::new(350.0, 120.0));
        assert_eq!(canvas.pressed(), Some(ShapeOwner::NodeBody(id)));
        canvas.pointer_moved(Pos2::new(360.0, 130.0));
        canvas.pointer_moved(Pos2::new(380.0, 110.0));
        canvas.pointer_released(Pos2::new(380.0, 110.0));

        assert_eq!(canvas.node(id).unwrap().position(), Pos2::new(330.0, 90.0));
        assert_eq!(canvas.pressed(), None);
    }

    #[test]
    fn test_drag_from_input_does_nothing() {
        let mut canvas = canvas();
        let a = canvas.add_node(Pos2::new(300.0, 100.0), 1, 1);
        let b = canvas.add_node(Pos2::new(500.0, 100.0), 1, 1);
        let input = canvas.node(a).unwrap().inputs()[0];
        let other_input = canvas.node(b).unwrap().inputs()[0];

        let start = canvas.terminal_position(input).unwrap();
        let end = canvas.terminal_position(other_input).unwrap();
        canvas.pointer_pressed(start);
        canvas.pointer_moved(start + Vec2::new(5.0, 0.0));
        canvas.pointer_moved(end);
        canvas.pointer_released(end);
        canvas.tick();

        assert_eq!(canvas.controller().drag_source(), None);
        assert!(canvas.controller().connections().is_empty());
    }

    #[test]
    fn test_unknown_node() {
        let mut canvas = canvas();
        assert_eq!(canvas.node(4).unwrap_err(), EditorError::UnknownNode(4));
        assert!(canvas.move_node(4, Vec2::X).is_err());
        assert!(canvas.set_node_body_color(4, Color32::RED).is_err());
    }
}

//! Terminal types: connection endpoints bound to a circle on the canvas

use super::graph::ConnectionId;
use super::node::NodeId;
use crate::error::{EditorError, Result};
use crate::scene::{Scene, ShapeId, ShapeOwner};
use crate::theme;
use egui::{Color32, Pos2, Stroke};

/// Unique identifier for a terminal
pub type TerminalId = usize;

/// Direction of a terminal (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalRole {
    Input,
    Output,
}

impl TerminalRole {
    /// Raw value of [`TerminalRole::Input`]
    pub const INPUT: u8 = 0;
    /// Raw value of [`TerminalRole::Output`]
    pub const OUTPUT: u8 = 1;
}

impl TryFrom<u8> for TerminalRole {
    type Error = EditorError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            Self::INPUT => Ok(Self::Input),
            Self::OUTPUT => Ok(Self::Output),
            other => Err(EditorError::InvalidArgument(format!(
                "the role of a terminal must either be INPUT ({}) or OUTPUT ({}), got {}",
                Self::INPUT,
                Self::OUTPUT,
                other
            ))),
        }
    }
}

impl From<TerminalRole> for u8 {
    fn from(role: TerminalRole) -> Self {
        match role {
            TerminalRole::Input => TerminalRole::INPUT,
            TerminalRole::Output => TerminalRole::OUTPUT,
        }
    }
}

/// A connection endpoint.
///
/// An input holds at most one parent connection, an output any number of
/// children. The rubber-band line only exists once a drag has started from
/// this terminal and is hidden, never destroyed, when the drag ends.
#[derive(Debug, Clone)]
pub struct Terminal {
    pub id: TerminalId,
    role: TerminalRole,
    point: ShapeId,
    node: Option<NodeId>,
    parent: Option<ConnectionId>,
    children: Vec<ConnectionId>,
    rubber_band: Option<ShapeId>,
    idle_color: Color32,
    active_color: Color32,
}

impl Terminal {
    /// Creates a terminal bound to the circle `point`.
    ///
    /// The circle is bound back to the terminal so pointer hits on it
    /// resolve to `id`.
    pub fn new(id: TerminalId, point: ShapeId, role: TerminalRole, scene: &mut Scene) -> Self {
        scene.bind(point, ShapeOwner::Terminal(id));
        let colors = theme::colors();
        Self {
            id,
            role,
            point,
            node: None,
            parent: None,
            children: Vec::new(),
            rubber_band: None,
            idle_color: colors.terminal_idle,
            active_color: colors.terminal_active,
        }
    }

    /// Creates a terminal from a raw role value, see [`TerminalRole::try_from`].
    ///
    /// Nothing is bound when the role is rejected.
    pub fn from_raw_role(id: TerminalId, point: ShapeId, role: u8, scene: &mut Scene) -> Result<Self> {
        let role = TerminalRole::try_from(role)?;
        Ok(Self::new(id, point, role, scene))
    }

    /// Marks the node owning this terminal
    pub(crate) fn set_node(&mut self, node: NodeId) {
        self.node = Some(node);
    }

    pub fn role(&self) -> TerminalRole {
        self.role
    }

    /// Checks if this terminal is an input
    pub fn is_input(&self) -> bool {
        matches!(self.role, TerminalRole::Input)
    }

    /// Checks if this terminal is an output
    pub fn is_output(&self) -> bool {
        matches!(self.role, TerminalRole::Output)
    }

    /// The circle this terminal is bound to
    pub fn point(&self) -> ShapeId {
        self.point
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn parent(&self) -> Option<ConnectionId> {
        self.parent
    }

    pub fn children(&self) -> &[ConnectionId] {
        &self.children
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Every connection this terminal takes part in, parent first
    pub fn connections(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.parent.into_iter().chain(self.children.iter().copied())
    }

    pub fn has_connections(&self) -> bool {
        self.parent.is_some() || !self.children.is_empty()
    }

    pub fn rubber_band(&self) -> Option<ShapeId> {
        self.rubber_band
    }

    pub fn idle_color(&self) -> Color32 {
        self.idle_color
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn set_idle_color(&mut self, color: Color32) {
        self.idle_color = color;
    }

    pub fn set_active_color(&mut self, color: Color32) {
        self.active_color = color;
    }

    /// Color the terminal should show once the frame has been refreshed
    pub fn display_color(&self) -> Color32 {
        if self.has_connections() {
            self.active_color
        } else {
            self.idle_color
        }
    }

    /// Records the upstream connection. Returns `false` if one is already set.
    pub(crate) fn set_parent(&mut self, connection: ConnectionId) -> bool {
        if self.parent.is_some() {
            return false;
        }
        self.parent = Some(connection);
        true
    }

    pub(crate) fn add_child(&mut self, connection: ConnectionId) {
        self.children.push(connection);
    }

    /// Creates the rubber band on the first call, then drags its end to `pointer`
    pub(crate) fn stretch_rubber_band(&mut self, scene: &mut Scene, pointer: Pos2) {
        match self.rubber_band {
            Some(line) => {
                scene.set_line_end(line, pointer);
                scene.set_visible(line, true);
            }
            None => {
                let start = scene.center(self.point).unwrap_or(pointer);
                let stroke = Stroke::new(theme::dimensions().connection_stroke_width, self.active_color);
                self.rubber_band = Some(scene.add_line(start, pointer, stroke));
            }
        }
    }

    pub(crate) fn hide_rubber_band(&self, scene: &mut Scene) {
        if let Some(line) = self.rubber_band {
            scene.set_visible(line, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(scene: &mut Scene) -> ShapeId {
        scene.add_circle(Pos2::new(10.0, 10.0), 10.0, Color32::BLUE)
    }

    #[test]
    fn test_valid_roles() {
        let mut scene = Scene::new();
        for (raw, role) in [
            (TerminalRole::INPUT, TerminalRole::Input),
            (TerminalRole::OUTPUT, TerminalRole::Output),
        ] {
            let point = circle(&mut scene);
            let terminal = Terminal::from_raw_role(0, point, raw, &mut scene).unwrap();
            assert_eq!(terminal.role(), role);
            assert_eq!(u8::from(role), raw);
        }
    }

    #[test]
    fn test_invalid_roles_rejected() {
        let mut scene = Scene::new();
        let point = circle(&mut scene);
        for raw in [2u8, 3, 42, u8::MAX] {
            let err = Terminal::from_raw_role(7, point, raw, &mut scene).unwrap_err();
            assert!(matches!(err, EditorError::InvalidArgument(_)));
        }
        // Rejected construction leaves the circle unbound
        assert_eq!(scene.get(point).and_then(|shape| shape.owner), None);
    }

    #[test]
    fn test_binding_resolves_to_terminal() {
        let mut scene = Scene::new();
        let point = circle(&mut scene);
        let terminal = Terminal::new(5, point, TerminalRole::Output, &mut scene);

        assert!(terminal.is_output());
        assert!(!terminal.is_input());
        assert_eq!(scene.hit_test(Pos2::new(12.0, 8.0)), Some(ShapeOwner::Terminal(5)));
    }

    #[test]
    fn test_parent_is_set_once() {
        let mut scene = Scene::new();
        let point = circle(&mut scene);
        let mut terminal = Terminal::new(0, point, TerminalRole::Input, &mut scene);

        assert!(!terminal.has_connections());
        assert!(terminal.set_parent(3));
        assert!(!terminal.set_parent(4));
        assert_eq!(terminal.parent(), Some(3));
        assert_eq!(terminal.connections().collect::<Vec<_>>(), vec![3]);
        assert_eq!(terminal.display_color(), terminal.active_color());
    }

    #[test]
    fn test_rubber_band_lifecycle() {
        let mut scene = Scene::new();
        let point = circle(&mut scene);
        let mut terminal = Terminal::new(0, point, TerminalRole::Output, &mut scene);
        assert!(terminal.rubber_band().is_none());

        terminal.stretch_rubber_band(&mut scene, Pos2::new(50.0, 50.0));
        let line = terminal.rubber_band().unwrap();
        assert_eq!(scene.line(line), Some((Pos2::new(10.0, 10.0), Pos2::new(50.0, 50.0))));

        terminal.hide_rubber_band(&mut scene);
        assert!(!scene.is_visible(line));

        terminal.stretch_rubber_band(&mut scene, Pos2::new(80.0, 20.0));
        assert_eq!(terminal.rubber_band(), Some(line));
        assert!(scene.is_visible(line));
        assert_eq!(scene.line(line), Some((Pos2::new(10.0, 10.0), Pos2::new(80.0, 20.0))));
    }
}

//! Terminal interaction handling (connection drags, commits, per-frame refresh)

use crate::error::{EditorError, Result};
use crate::nodes::{ConnectionGraph, ConnectionId, Terminal, TerminalId, TerminalRole};
use crate::scene::{Scene, ShapeId};
use crate::theme;
use egui::{Pos2, Stroke};
use log::{debug, trace};

/// Owns the terminal registry, the connection graph and the drag source of
/// one editor session.
///
/// At most one terminal is the drag source at any time. All mutation goes
/// through `&mut self`, so the state is confined to whoever owns the
/// controller.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    terminals: Vec<Terminal>,
    connections: ConnectionGraph,
    drag_source: Option<TerminalId>,
}

impl InteractionController {
    /// Creates a new interaction controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the circle `point` in a new terminal and registers it
    pub fn register_terminal(&mut self, scene: &mut Scene, point: ShapeId, role: TerminalRole) -> TerminalId {
        let id = self.terminals.len();
        self.terminals.push(Terminal::new(id, point, role, scene));
        id
    }

    /// Same as [`register_terminal`](Self::register_terminal) with a raw role value
    pub fn register_terminal_raw(&mut self, scene: &mut Scene, point: ShapeId, role: u8) -> Result<TerminalId> {
        let id = self.terminals.len();
        let terminal = Terminal::from_raw_role(id, point, role, scene)?;
        self.terminals.push(terminal);
        Ok(id)
    }

    pub fn terminal(&self, id: TerminalId) -> Result<&Terminal> {
        self.terminals.get(id).ok_or(EditorError::UnknownTerminal(id))
    }

    pub fn terminal_mut(&mut self, id: TerminalId) -> Result<&mut Terminal> {
        self.terminals.get_mut(id).ok_or(EditorError::UnknownTerminal(id))
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    pub fn connections(&self) -> &ConnectionGraph {
        &self.connections
    }

    pub fn drag_source(&self) -> Option<TerminalId> {
        self.drag_source
    }

    /// A drag tick on terminal `id`.
    ///
    /// Outputs become the drag source and stretch their rubber band to
    /// `pointer`. Inputs never start a connection.
    pub fn begin_drag(&mut self, scene: &mut Scene, id: TerminalId, pointer: Pos2) {
        let Some(terminal) = self.terminals.get_mut(id) else {
            return;
        };
        if !terminal.is_output() {
            trace!("Ignoring drag on input terminal {}", id);
            return;
        }

        if self.drag_source != Some(id) {
            debug!("Started connection drag from terminal {}", id);
        }
        self.drag_source = Some(id);
        terminal.stretch_rubber_band(scene, pointer);
    }

    /// The pointer entered terminal `id`.
    ///
    /// Commits a connection from the current drag source when `id` is an
    /// input without a parent. Returns the new connection, or `None` when
    /// nothing changed.
    pub fn hover_commit(&mut self, scene: &mut Scene, id: TerminalId) -> Option<ConnectionId> {
        let target = self.terminals.get(id)?;
        if !target.is_input() {
            return None;
        }
        let source_id = self.drag_source.filter(|&source| source != id)?;
        let source = self.terminals.get(source_id)?;
        if !source.is_output() {
            return None;
        }
        if target.has_parent() {
            debug!("Terminal {} already has a parent, ignoring connection from {}", id, source_id);
            return None;
        }

        let from = scene.center(source.point())?;
        let to = scene.center(target.point())?;
        let stroke = Stroke::new(
            theme::dimensions().connection_stroke_width,
            theme::colors().connection,
        );
        let line = scene.add_line(from, to, stroke);
        let connection = self.connections.add(source_id, id, line);

        self.terminals[id].set_parent(connection);
        self.terminals[source_id].add_child(connection);

        debug!("Connected terminal {} -> {} (connection {})", source_id, id, connection);
        Some(connection)
    }

    /// The pointer was released over, or after dragging from, terminal `id`
    pub fn end_drag(&mut self, scene: &mut Scene, id: TerminalId) {
        if self.drag_source == Some(id) {
            debug!("Ended connection drag from terminal {}", id);
            self.drag_source = None;
        }

        if let Some(terminal) = self.terminals.get(id) {
            terminal.hide_rubber_band(scene);
            scene.set_fill(terminal.point(), terminal.idle_color());
        }
    }

    /// Per-frame pass: re-anchor every committed line to its terminals and
    /// color each terminal by whether it is connected.
    pub fn refresh(&self, scene: &mut Scene) {
        for connection in self.connections.iter() {
            let (Some(source), Some(target)) = (
                self.terminals.get(connection.source),
                self.terminals.get(connection.target),
            ) else {
                continue;
            };
            let (Some(from), Some(to)) = (scene.center(source.point()), scene.center(target.point()))
            else {
                continue;
            };
            scene.set_line(connection.line, from, to);
            scene.set_visible(connection.line, true);
        }

        for terminal in &self.terminals {
            scene.set_fill(terminal.point(), terminal.display_color());
        }
    }
}

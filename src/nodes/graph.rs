//! Connection graph data structures

use super::terminal::TerminalId;
use crate::scene::ShapeId;

/// Unique identifier for a connection
pub type ConnectionId = usize;

/// A committed link from an output terminal to an input terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    /// The output the drag started from
    pub source: TerminalId,
    /// The input that accepted the connection
    pub target: TerminalId,
    /// The persistent line drawn between both terminals
    pub line: ShapeId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(id: ConnectionId, source: TerminalId, target: TerminalId, line: ShapeId) -> Self {
        Self {
            id,
            source,
            target,
            line,
        }
    }

    /// Checks if `terminal` is either end of this connection
    pub fn touches(&self, terminal: TerminalId) -> bool {
        self.source == terminal || self.target == terminal
    }
}

/// Owns every committed connection of an editor session
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
}

impl ConnectionGraph {
    /// Creates a new empty connection graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection and returns its ID
    pub fn add(&mut self, source: TerminalId, target: TerminalId, line: ShapeId) -> ConnectionId {
        let id = self.connections.len();
        self.connections.push(Connection::new(id, source, target, line));
        id
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// The connection feeding `terminal`, if any
    pub fn parent_of(&self, terminal: TerminalId) -> Option<&Connection> {
        self.connections.iter().find(|conn| conn.target == terminal)
    }

    /// Connections leaving `terminal`
    pub fn children_of(&self, terminal: TerminalId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |conn| conn.source == terminal)
    }
}

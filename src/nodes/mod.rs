//! Node system - nodes, terminals and the connections between them

pub mod graph;
pub mod node;
pub mod terminal;

// Re-export core types
pub use graph::{Connection, ConnectionGraph, ConnectionId};
pub use node::{Node, NodeId, NodeStyle};
pub use terminal::{Terminal, TerminalId, TerminalRole};

//! nodewire core library
//!
//! Nodes with input and output terminals on a canvas, wired together by
//! dragging from an output onto an input.

pub mod constants;
pub mod editor;
pub mod error;
pub mod nodes;
pub mod scene;
pub mod theme;

// Re-export commonly used types
pub use editor::{Canvas, InteractionController, NodeEditor};
pub use error::{EditorError, Result};
pub use nodes::{Connection, Node, NodeId, Terminal, TerminalId, TerminalRole};

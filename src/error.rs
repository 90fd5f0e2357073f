use crate::nodes::{NodeId, TerminalId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the editor model.
///
/// Pointer interactions never produce these; redundant or invalid gestures
/// are silently ignored. Only construction and lookups through the public
/// API can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to load theme from '{}': {message}", .path.display())]
    ThemeLoad { path: PathBuf, message: String },

    #[error("Terminal {0} does not exist")]
    UnknownTerminal(TerminalId),

    #[error("Node {0} does not exist")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, EditorError>;

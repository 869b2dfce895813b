//! Error types for the graph workbench.

use thiserror::Error;

/// All errors that can occur in the graph workbench.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Referenced vertex does not exist.
    #[error("Vertex {0:?} not found")]
    InvalidVertex(String),

    /// Explicitly named vertex already exists.
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(String),

    /// No edge between the two vertices.
    #[error("No edge between {from:?} and {to:?}")]
    EdgeNotFound { from: String, to: String },

    /// An edge between the two vertices already exists.
    #[error("Edge between {from:?} and {to:?} already exists")]
    DuplicateEdge { from: String, to: String },

    /// Operation is not available for the current graph or input.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A line of an edge list could not be parsed.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A command line could not be understood.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidVertex(_) => "invalid_vertex",
            Self::DuplicateVertex(_) => "duplicate_vertex",
            Self::EdgeNotFound { .. } => "edge_not_found",
            Self::DuplicateEdge { .. } => "duplicate_edge",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::MalformedInput { .. } => "malformed_input",
            Self::InvalidCommand(_) => "invalid_command",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }

    /// Errors a user should see as a warning rather than a silent no-op.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperation(_) | Self::MalformedInput { .. }
        )
    }
}

/// Convenience result type for graph workbench operations.
pub type GraphResult<T> = Result<T, GraphError>;

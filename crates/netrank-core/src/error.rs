//! Error types for netrank-core.

use thiserror::Error;

/// Error type for graph construction, ranking, and edge-list ingestion.
#[derive(Error, Debug)]
pub enum Error {
    /// Node identifier rejected (empty).
    #[error("Invalid node: {0:?}")]
    InvalidNode(String),

    /// Edge rejected because one of its endpoints is not a valid node.
    #[error("Invalid edge: ({from:?}, {to:?})")]
    InvalidEdge {
        /// Source endpoint as given.
        from: String,
        /// Destination endpoint as given.
        to: String,
    },

    /// Argument outside its allowed range (top-N size, algorithm config).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Graph kind requested by name is neither directed nor undirected.
    #[error("Unsupported graph type: {0:?}")]
    UnsupportedGraphType(String),

    /// Malformed edge-list record.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: u64,
        /// What was wrong with the record.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for netrank operations.
pub type Result<T> = std::result::Result<T, Error>;

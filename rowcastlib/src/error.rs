//! Error types for rowcastlib

use thiserror::Error;

/// Errors that can occur while accessing or rendering tables
#[derive(Error, Debug)]
pub enum RowcastError {
    /// Row has no cell under the requested column
    #[error("column not found: '{name}'")]
    ColumnNotFound { name: String },

    /// IO error while writing to an output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

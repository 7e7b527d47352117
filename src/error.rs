//! Error types for the dxf-inventory library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dxf-inventory operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// Input drawing does not exist or cannot be opened
    #[error("drawing not found: {}", .path.display())]
    InputNotFound {
        /// The path that failed to resolve
        path: PathBuf,
    },

    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing DXF content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid or unsupported file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Report file could not be written next to the input
    #[error("failed to write report {}: {source}", .path.display())]
    OutputWrite {
        /// The report path that could not be written
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Error encoding the report as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dxf-inventory operations
pub type Result<T> = std::result::Result<T, DxfError>;

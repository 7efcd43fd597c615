//! Error types for figstyle.
//!
//! All fallible constructors in this crate validate their inputs and
//! report violations through [`StyleError`] instead of producing
//! undefined numeric output.

use thiserror::Error;

/// The main error type for figstyle operations.
#[derive(Error, Debug)]
pub enum StyleError {
    /// IO errors (style-sheet files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Invalid numeric range errors (vmin/vmax, truncation bounds)
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Unknown palette name
    #[error("Unknown palette: {name}")]
    UnknownPalette { name: String },

    /// Malformed color literal
    #[error("Invalid color: {message}")]
    InvalidColor { message: String },

    /// Style-sheet validation errors
    #[error("Style error: {message}")]
    Style { message: String },
}

/// Convenience type alias for Results with StyleError
pub type Result<T> = std::result::Result<T, StyleError>;

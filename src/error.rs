//! Error types for mathtext.
//!
//! Rendering itself never fails. These cover palette configuration and the
//! I/O around it.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color name {name:?}")]
    InvalidColorName { name: String },

    #[error("invalid display value {value:?} for color {name}")]
    InvalidColorValue { name: String, value: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

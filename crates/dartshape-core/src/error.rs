//! Error types for dartshape

use thiserror::Error;

/// Result type for dartshape operations
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors that can occur outside the (total) scanner itself
#[derive(Error, Debug)]
pub enum ShapeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

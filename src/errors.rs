//! Error types for EcoBuddy
//!
//! Provides comprehensive error handling with context propagation
//! across the advisor and triage subsystems.

use thiserror::Error;

/// Main error type for the EcoBuddy system
#[derive(Error, Debug)]
pub enum EcobuddyError {
    /// Model artifact loading errors
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// Image decoding/preprocessing errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Tensor construction and forward-pass errors
    #[error("Tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    /// Prediction head returned an unexpected shape
    #[error("Shape mismatch in {head} head: expected {expected} classes, got {actual}")]
    ShapeMismatch {
        head: String,
        expected: usize,
        actual: usize,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("EcoBuddy error: {0}")]
    Generic(String),
}

/// Result type alias for EcoBuddy operations
pub type Result<T> = std::result::Result<T, EcobuddyError>;

/// Convert anyhow errors to EcobuddyError
impl From<anyhow::Error> for EcobuddyError {
    fn from(err: anyhow::Error) -> Self {
        EcobuddyError::Generic(err.to_string())
    }
}

//! Error types for switchyard-store

use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum Error {
    /// Rule input rejected
    #[error("validation error: {0}")]
    Validation(String),

    /// Rule not found
    #[error("rule not found: {0}")]
    NotFound(String),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<switchyard_core::Error> for Error {
    fn from(err: switchyard_core::Error) -> Self {
        match err {
            switchyard_core::Error::Validation(msg) => Self::Validation(msg),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

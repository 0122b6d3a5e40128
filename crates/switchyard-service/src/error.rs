//! Error types for switchyard-service

use thiserror::Error;

/// Service error type
#[derive(Debug, Error)]
pub enum Error {
    /// Rule store error, passed through unchanged
    #[error("store error: {0}")]
    Store(#[from] switchyard_store::Error),

    /// Audit sink failed to record an event
    #[error("audit error: {0}")]
    Audit(String),
}

impl Error {
    /// Whether the error is a rejected rule input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Store(switchyard_store::Error::Validation(_)))
    }

    /// Whether the error is an unknown rule ID
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(switchyard_store::Error::NotFound(_)))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

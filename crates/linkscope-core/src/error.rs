//! Error types for backend calls.

use std::error::Error;

use thiserror::Error;

/// Failure of a single request against the analysis backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("request for {operation} failed")]
    Transport {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The backend answered with a non-success status.
    #[error("{operation} returned status {status}")]
    Status {
        /// Operation identifier.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
    },
    /// The response body did not match the expected shape.
    #[error("failed to decode {operation} response")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ServiceError {
    /// HTTP status carried by the error, when the backend responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Convenience alias for backend call results.
pub type ServiceResult<T> = Result<T, ServiceError>;

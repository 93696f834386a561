//! Transport error types.

use thiserror::Error;

/// Error type for event delivery.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The collection API answered with a non-success status.
    #[error("POST request to {url} returned {status} HTTP status")]
    Delivery {
        /// Destination the event was posted to.
        url: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// No response was received (DNS, connection reset, timeout, TLS).
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The event could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransportError {
    /// Status code for delivery failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Delivery { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using TransportError.
pub type TransportResult<T> = Result<T, TransportError>;

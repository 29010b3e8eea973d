//! Error types for status polling

use thiserror::Error;

/// Result type alias for polling operations
pub type Result<T> = std::result::Result<T, PollError>;

/// Ways a single status fetch can fail
///
/// All variants are non-fatal to the monitor loop: a failed fetch is logged
/// and retried at the next cadence tick, with no backoff and no retry
/// ceiling. None of these ever reaches the status stream.
#[derive(Debug, Error)]
pub enum PollError {
    /// The underlying network call failed
    #[error("status request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a status code outside the success set
    #[error("error polling job status (status {status}): {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics only
        body: String,
    },

    /// The response body was not a valid job status document
    #[error("failed to decode job status: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PollError {
    /// Create an error for a response outside the success set
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }

    /// Check if this error came from decoding the response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

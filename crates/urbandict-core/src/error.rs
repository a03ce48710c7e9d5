//! Error types for dictionary lookups.

use std::time::Duration;

/// Every way a lookup can fail. None of these are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The rate gate refused the call; nothing was sent.
    #[error("rate limited: wait {retry_after:?} before the next request")]
    RateLimited { retry_after: Duration },

    /// Service answered with a 4xx status.
    #[error("client error: {status}")]
    Client { status: u16 },

    /// Service answered with a 5xx status.
    #[error("server error: {status}")]
    Server { status: u16 },

    /// Body was not a valid response document.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LookupError {
    /// HTTP status for client and server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status } | Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Whether trying again later can succeed without changing the request.
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limited()
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Client { .. } => 2,
            Self::Server { .. } => 3,
            Self::Decode(_) => 4,
            Self::Transport(_) => 5,
            Self::RateLimited { .. } => 6,
        }
    }
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while serving a tool call
///
/// Upstream failures keep the HTTP status and the response body so the caller
/// sees exactly what the brokerage returned.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure: connection refused, TLS error or timeout
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The upstream body could not be decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local I/O failure, e.g. reading a secret file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The upstream rejected the credentials (HTTP 401)
    #[error("unauthorized ({status}): {body}")]
    Unauthorized {
        /// Upstream status code
        status: StatusCode,
        /// Upstream response body
        body: String,
    },
    /// The upstream throttled the request (HTTP 429)
    #[error("rate limit exceeded ({}): {body}", StatusCode::TOO_MANY_REQUESTS)]
    RateLimitExceeded {
        /// Upstream response body
        body: String,
    },
    /// Any other non-success status
    #[error("api error ({status}): {body}")]
    Api {
        /// Upstream status code
        status: StatusCode,
        /// Upstream response body
        body: String,
    },
    /// A tool argument failed validation; no request was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the upstream HTTP status, if the error came from a response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized { status, .. } | AppError::Api { status, .. } => Some(*status),
            AppError::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Maps a non-success status and its body to the matching variant
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized { status, body },
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded { body },
            _ => AppError::Api { status, body },
        }
    }
}

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

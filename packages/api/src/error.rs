//! Client-side error taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between a form and the remote API.
///
/// `Display` is what the panels show, so `Http` renders the server message
/// verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no stored token.
    #[error("No authentication token found")]
    MissingToken,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never completed (DNS, CORS, connection reset...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The client-side timeout elapsed before the server answered.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The body was not the JSON shape the call expects.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Worth re-sending an idempotent request after this error.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) | ApiError::Timeout(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::MissingToken | ApiError::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

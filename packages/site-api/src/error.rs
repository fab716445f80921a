//! Unified failure type for both remote call styles.

use supabase_client::SupabaseError;
use thiserror::Error;

/// Result type for facade and backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Why a remote procedure call or collection read failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with an error value
    #[error("{}", .message.as_deref().unwrap_or("Remote call failed"))]
    Remote {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The request never got an answer (connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The answer could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The client is misconfigured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Shorthand for a remote error with a message and no status.
    pub fn remote(message: impl Into<String>) -> Self {
        ApiError::Remote {
            status: None,
            message: Some(message.into()),
        }
    }

    /// The human-readable message, when the failure carries one.
    pub fn message(&self) -> Option<String> {
        match self {
            ApiError::Remote { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<SupabaseError> for ApiError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Http { status, message } => ApiError::Remote {
                status: Some(status),
                message,
            },
            SupabaseError::Network(e) => ApiError::Network(e.to_string()),
            SupabaseError::Parse(msg) => ApiError::Parse(msg),
            SupabaseError::Config(msg) => ApiError::Config(msg),
        }
    }
}

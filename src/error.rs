//! Error types for the transport client and the token store

use thiserror::Error;

/// Failure of a single request against the storefront API.
///
/// Every variant is terminal for the call that produced it: nothing in this
/// crate retries or falls back to cached data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL joined with the request path is not a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized; nothing was sent
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Transport failure (`status` is `None`) or a non-2xx status
    #[error("invalid response: {message}")]
    InvalidResponse {
        status: Option<u16>,
        message: String,
    },

    /// The response body does not match the expected schema
    #[error("failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status that caused the failure, if the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::InvalidResponse {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Failure of the persistent token store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("token database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The directory holding the database file could not be created
    #[error("failed to prepare token database directory: {0}")]
    Io(#[from] std::io::Error),
}

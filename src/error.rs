//! Error types for the shopping relay.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Outbound delivery errors. Only ever logged, never surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Webhook returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Rejections returned synchronously by the shopping-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Must provide data in the 'shoppingItems' for this API endpoint")]
    MissingList,

    #[error("Must provide 'username'")]
    MissingIdentity,

    #[error("Must provide a user's 'key'")]
    MissingSecret,

    #[error("The provided username and key were not valid")]
    Unauthorized,
}

impl ApiError {
    /// HTTP status for this rejection: 400 for missing fields, 401 for bad credentials.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingList | Self::MissingIdentity | Self::MissingSecret => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Short reason used in the rejection log line.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingList => "Invalid input: Missing shoppingItems",
            Self::MissingIdentity => "Invalid input: Missing username",
            Self::MissingSecret => "Invalid input: Missing key",
            Self::Unauthorized => "Unknown username and key",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(
            code = status.as_u16(),
            reason = self.reason(),
            message = %self,
            "Rejected shopping list request"
        );
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, Error>;

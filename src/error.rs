//! Error types for the jobboard CLI

use std::time::Duration;
use thiserror::Error;

use crate::board::Route;
use crate::board::validation::ValidationError;

/// Result type alias for jobboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A protected action was attempted without a session.
    #[error("{0}")]
    LoginRequired(String),

    #[error("A request is already in progress for this form")]
    Busy,

    #[error("Request cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// True when the API rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api(ApiError::Unauthorized))
    }

    /// Screen the user should be sent to after this error, if any.
    pub fn route(&self) -> Option<Route> {
        match self {
            Error::LoginRequired(_) | Error::Api(ApiError::Unauthorized) => Some(Route::Login),
            _ => None,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired or invalid. Please login again.")]
    Unauthorized,

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status code {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and session file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

//! Server errors and their HTTP status codes.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while serving requests or loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be interpreted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Another calculation holds the session.
    #[error("A calculation is already in progress")]
    Busy,

    /// The computation itself failed.
    #[error(transparent)]
    Computation(#[from] primegap::Error),

    /// The configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or socket failure.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization failure.
    #[error("Serialization error: {0}")]
    Json(String),
}

/// Result alias for server operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

// Status codes for API responses
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Computation(primegap::Error::InvalidBound(_)) => StatusCode::BAD_REQUEST,
            Error::Busy => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for (StatusCode, String) {
    fn from(err: Error) -> Self {
        (StatusCode::from(&err), err.to_string())
    }
}

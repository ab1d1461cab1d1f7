//! Error types and their HTTP representation
//!
//! Every failure a handler can hit is converted straight into a plain-text
//! response at the point it occurs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded; carries the parser message
    #[error("{0}")]
    BadRequest(String),

    #[error("URL not found")]
    NotFound,

    /// Stored URL cannot be placed in a `Location` header
    #[error("stored URL is not a valid redirect target")]
    InvalidRedirectTarget,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRedirectTarget => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

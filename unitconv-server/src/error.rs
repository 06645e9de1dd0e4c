//! Server and request errors
//!
//! Request errors are answered with a plain-text body; unknown categories
//! map to 403, every other rejection to 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;
use unitconv_units::ConversionError;

/// Errors raised while starting or running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid value for {var}: {value:?}")]
    Config { var: &'static str, value: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while handling a request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query string lacks the named parameter
    #[error("no {0} provided")]
    MissingParameter(&'static str),
    /// Request body is not a decodable conversion request
    #[error("{0}")]
    MalformedBody(String),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Conversion(ConversionError::UnknownCategory(_)) => StatusCode::FORBIDDEN,
            ApiError::Conversion(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(status = status.as_u16(), %message, "request rejected");
        (status, message).into_response()
    }
}

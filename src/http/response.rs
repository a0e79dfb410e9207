//! Conversion of service errors into HTTP responses.
//!
//! Every failure keeps the same JSON envelope as a success, with the
//! error message in `message` and no primes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::PrimegenError;
use crate::core::types::PrimeSequenceResult;

impl PrimegenError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            PrimegenError::InvalidLimit(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PrimegenError::ConfigError(_) => StatusCode::BAD_REQUEST,
            PrimegenError::GenerationFailed(_)
            | PrimegenError::IoError(_)
            | PrimegenError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for PrimegenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(PrimeSequenceResult::failed(self.message()));

        (status, body).into_response()
    }
}

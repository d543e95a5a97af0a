//! HTTP error mapping
//!
//! Domain errors cross the HTTP boundary as `{"detail": ...}` JSON bodies.
//! Database, config, and notification failures are logged with their cause
//! but reported to clients as a generic internal error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_domain::PortfolioError;
use serde_json::json;
use tracing::error;

/// Wrapper so handlers can return domain errors with `?`
#[derive(Debug)]
pub struct ApiError(PortfolioError);

impl From<PortfolioError> for ApiError {
    fn from(err: PortfolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            PortfolioError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            PortfolioError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            err => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

//! # Error Handling Middleware
//!
//! This module maps domain errors from the core crate to HTTP status codes
//! and JSON error bodies of the form `{ "success": false, "error": "..." }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use studiobook_core::errors::StudioError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `StudioError` instances and implements
/// `IntoResponse` to convert them into HTTP responses.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use studiobook_api::middleware::error_handling::AppError;
/// use studiobook_core::errors::StudioError;
///
/// async fn handler(id: u32) -> Result<Json<u32>, AppError> {
///     if id == 0 {
///         return Err(AppError(StudioError::NotFound(format!("Studio with ID {} not found", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub StudioError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StudioError::NotFound(_) => StatusCode::NOT_FOUND,
            StudioError::Validation(_) => StatusCode::BAD_REQUEST,
            StudioError::Conflict(_) => StatusCode::CONFLICT,
            StudioError::CorruptStorage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StudioError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StudioError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "success": false, "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `StudioResult` values inside handlers.
impl From<StudioError> for AppError {
    fn from(err: StudioError) -> Self {
        AppError(err)
    }
}

/// Wraps infrastructure failures as storage errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(StudioError::Storage(err))
    }
}

//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses. Only a missing resource gets a
//! deliberate answer (`404` with an empty JSON object). Every other failure
//! surfaces as a bare `500` with no payload, after being logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::ClinicError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::errors::ClinicError;
///
/// async fn handler(id: i64) -> Result<Json<i64>, AppError> {
///     if id <= 0 {
///         return Err(AppError(ClinicError::NotFound(format!("Doctor with ID {} not found", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self.0 {
            ClinicError::NotFound(message) => {
                tracing::debug!("{}", message);
                (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
            }
            ClinicError::MalformedInput(_)
            | ClinicError::Database(_)
            | ClinicError::Internal(_) => {
                tracing::error!("Request failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on store calls; store failures are persistence failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Database(err))
    }
}

/// Maps a ClinicError to an HTTP response
pub fn map_error(err: ClinicError) -> Response {
    AppError(err).into_response()
}

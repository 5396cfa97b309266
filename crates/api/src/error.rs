use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use roster_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster-core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = &self;
        let (status, code, message, fields) = match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
                None,
            ),
            CoreError::Validation(field_errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "One or more fields are invalid".to_string(),
                Some(serde_json::to_value(field_errors).unwrap_or_default()),
            ),
            CoreError::InactiveEntity { entity, id } => (
                StatusCode::CONFLICT,
                "INACTIVE_ENTITY",
                format!("{entity} with id {id} is inactive; reactivate it first"),
                None,
            ),
            CoreError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let (Some(fields), Some(map)) = (fields, body.as_object_mut()) {
            map.insert("fields".to_string(), fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wikistack_core::error::{CoreError, ValidationError};
use wikistack_db::SaveError;

/// Application-level error type for HTTP handlers.
///
/// Wraps lookup failures, field validation and sqlx errors. Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wikistack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Field-level validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<SaveError> for AppError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Validation(v) => AppError::Validation(v),
            SaveError::Database(db) => AppError::Database(db),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} '{key}' not found"),
            ),

            AppError::Validation(err) => {
                let body = json!({
                    "error": err.to_string(),
                    "code": "VALIDATION_ERROR",
                    "fields": err.errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Invalid text representation (e.g. an unknown enum label) maps to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation.
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            format!("Duplicate value violates unique constraint: {constraint}"),
                        );
                    }
                }
                // invalid_text_representation, raised for unknown enum labels.
                Some("22P02") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "INVALID_VALUE",
                        db_err.message().to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

//! Unified API error type for the route handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Fixed user-facing detail returned when feedback generation fails.
pub const GENERATION_FAILURE_DETAIL: &str =
    "Something went wrong while generating the AI feedback.";

#[derive(Error, Debug)]
pub enum AppError {
    /// A database insert or query failed. Surfaced as a generic server
    /// error; the handlers do not treat it specially.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The upstream generation call failed. The survey row written
    /// before the call is kept.
    #[error("{0}")]
    Generation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Generation(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_carries_fixed_detail() {
        let err = AppError::Generation(GENERATION_FAILURE_DETAIL.to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_is_masked() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

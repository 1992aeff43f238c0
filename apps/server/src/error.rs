//! # API Error Type
//!
//! Failures that are not reported as a flash message.
//!
//! Ledger writes catch their own validation and storage errors and turn them
//! into flashes (see [`crate::flash`]). Everything else, such as a list
//! query failing while rendering a page, ends up here and is answered with
//! a generic 500. The detailed cause is logged, never sent to the client.
//!
//! ```json
//! { "code": "INTERNAL", "message": "Internal server error" }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use oilmill_db::DbError;
use serde::Serialize;

/// Unexpected server-side failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code
    pub code: &'static str,

    /// Human-readable message, safe to display
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                ApiErrorBody {
                    code: "DATABASE_ERROR",
                    message: "Database operation failed",
                }
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                ApiErrorBody {
                    code: "INTERNAL",
                    message: "Internal server error",
                }
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_generic_500() {
        let response = ApiError::from(DbError::ConnectionFailed("/nope".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Storage(StorageError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.message().to_string())
            }
            AppError::Storage(err @ StorageError::ProductNotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Storage(storage_err) => {
                tracing::error!(error = ?storage_err, "Storage error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save product".to_string(),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

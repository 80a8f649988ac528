use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// Application error taxonomy.
///
/// Internally the variants stay distinct so logs and tests can tell them
/// apart; on the wire they collapse onto the two public statuses, 404 and 422.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::Storage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Re-tag any failure as "not found", keeping the original cause in the message.
    pub fn into_not_found(self) -> AppError {
        match self {
            AppError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::NotFound(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage(ref e) => tracing::error!("Storage error: {:?}", e),
            AppError::NotFound(ref msg) => tracing::debug!("Not found: {}", msg),
            AppError::InvalidInput(ref msg) => tracing::debug!("Invalid input: {}", msg),
        }

        let status = self.status();
        let body = Json(ErrorResponse::from_status(status));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(AppError::NotFound("question 7".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 404, "message": "Resource not found" })
        );
    }

    #[tokio::test]
    async fn test_invalid_input_body() {
        let (status, body) = body_json(AppError::InvalidInput("answer missing".to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({ "success": false, "error": 422, "message": "Unprocessable request" })
        );
    }

    #[test]
    fn test_storage_maps_to_unprocessable() {
        let err = AppError::Storage(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_not_found_keeps_cause() {
        let err = AppError::InvalidInput("searchTerm is required".to_string()).into_not_found();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("searchTerm is required"));
    }
}

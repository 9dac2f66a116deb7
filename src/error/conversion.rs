/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing handlers
 * to return `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * Every failure renders a structured JSON body with a success flag and a
 * human-readable message:
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "You are already registered for this event"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed with internal error: {}", message);
        } else {
            tracing::debug!("Request failed: {} {}", status, message);
        }

        let body = Json(serde_json::json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = ApiError::not_found("Event not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Event not found");
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let err: ApiError = sqlx::Error::PoolClosed.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Internal server error");
    }
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ChatError;
use crate::domain::MessageTextError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const SESSION_NOT_FOUND_MESSAGE: &str = "Session not found";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced at the HTTP boundary. Internal details never reach the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<MessageTextError> for ApiError {
    fn from(e: MessageTextError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::SessionNotFound => {
                ApiError::NotFound(SESSION_NOT_FOUND_MESSAGE.to_string())
            }
            ChatError::Repository(e) => {
                tracing::error!(error = %e, "Store operation failed");
                ApiError::Internal
            }
        }
    }
}

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::MessageText;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageResponse {
    pub reply: String,
    pub session_id: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn post_message_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> Result<Json<PostMessageResponse>, ApiError>
where
    L: LlmClient + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected chat message body");
        ApiError::BadRequest(INVALID_REQUEST_BODY.to_string())
    })?;

    let raw_message = request
        .message
        .ok_or_else(|| ApiError::BadRequest(MESSAGE_REQUIRED.to_string()))?;

    tracing::debug!(message = %sanitize_prompt(&raw_message), "Processing chat message");

    let text = MessageText::parse(&raw_message).inspect_err(|e| {
        tracing::warn!(error = %e, "Invalid chat message");
    })?;

    let chat_reply = state
        .chat_service
        .post_message(text, request.session_id.as_deref())
        .await?;

    Ok(Json(PostMessageResponse {
        reply: chat_reply.reply,
        session_id: chat_reply.session_id.to_string(),
    }))
}

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::Message;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const SESSION_ID_REQUIRED: &str = "sessionId query parameter is required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            conversation_id: message.conversation_id.to_string(),
            sender: message.sender.as_str().to_string(),
            text: message.text,
            timestamp: message.created_at,
        }
    }
}

#[tracing::instrument(skip(state, query))]
pub async fn history_handler<L>(
    State(state): State<AppState<L>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError>
where
    L: LlmClient + 'static,
{
    let session_id = query
        .ok()
        .and_then(|Query(q)| q.session_id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest(SESSION_ID_REQUIRED.to_string()))?;

    let messages = state.chat_service.history(&session_id).await?;

    tracing::debug!(count = messages.len(), "History loaded");

    Ok(Json(HistoryResponse {
        messages: messages.into_iter().map(MessageDto::from).collect(),
    }))
}

use std::sync::Arc;

use crate::application::ports::{ConversationRepository, LlmClient, RepositoryError};
use crate::domain::{ConversationId, Message, MessageSender, MessageText};

use super::ReplyGenerator;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Orchestrates one chat turn: resolve the session, store the user message, generate and
/// store the reply.
pub struct ChatService<L>
where
    L: LlmClient,
{
    conversation_repository: Arc<dyn ConversationRepository>,
    reply_generator: ReplyGenerator<L>,
    history_limit: usize,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(
        conversation_repository: Arc<dyn ConversationRepository>,
        reply_generator: ReplyGenerator<L>,
        history_limit: usize,
    ) -> Self {
        Self {
            conversation_repository,
            reply_generator,
            history_limit,
        }
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn post_message(
        &self,
        text: MessageText,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ChatError> {
        let conversation_id = self.resolve_session(session_id).await?;

        self.conversation_repository
            .append_message(conversation_id, MessageSender::User, text.as_str())
            .await?;

        let history = self
            .conversation_repository
            .list_recent_messages(conversation_id, self.history_limit)
            .await?;

        let reply = self.reply_generator.generate_reply(&history).await;

        self.conversation_repository
            .append_message(conversation_id, MessageSender::Ai, &reply)
            .await?;

        tracing::info!(conversation_id = %conversation_id, "Chat turn completed");

        Ok(ChatReply {
            reply,
            session_id: conversation_id,
        })
    }

    /// Unknown or malformed session ids yield an empty history rather than an error.
    #[tracing::instrument(skip(self))]
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>, ChatError> {
        let Ok(conversation_id) = session_id.parse::<ConversationId>() else {
            tracing::debug!("Malformed session id, returning empty history");
            return Ok(Vec::new());
        };

        let messages = self
            .conversation_repository
            .list_messages(conversation_id)
            .await?;

        Ok(messages)
    }

    async fn resolve_session(
        &self,
        session_id: Option<&str>,
    ) -> Result<ConversationId, ChatError> {
        let Some(raw_id) = session_id.filter(|id| !id.trim().is_empty()) else {
            let conversation = self.conversation_repository.create_conversation().await?;
            tracing::info!(conversation_id = %conversation.id, "Started new conversation");
            return Ok(conversation.id);
        };

        let conversation_id = raw_id
            .parse::<ConversationId>()
            .map_err(|_| ChatError::SessionNotFound)?;

        match self
            .conversation_repository
            .get_conversation(conversation_id)
            .await?
        {
            Some(conversation) => Ok(conversation.id),
            None => Err(ChatError::SessionNotFound),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    pub session_id: ConversationId,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("session not found")]
    SessionNotFound,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

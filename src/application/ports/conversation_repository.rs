use crate::domain::{Conversation, ConversationId, Message, MessageSender};
use async_trait::async_trait;

use super::RepositoryError;

/// Persistence for conversations and their append-only message log.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create_conversation(&self) -> Result<Conversation, RepositoryError>;

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    /// Fails with `ConstraintViolation` when the conversation does not exist.
    async fn append_message(
        &self,
        conversation_id: ConversationId,
        sender: MessageSender,
        text: &str,
    ) -> Result<Message, RepositoryError>;

    /// The last `limit` messages, oldest first.
    async fn list_recent_messages(
        &self,
        conversation_id: ConversationId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// Every message of the conversation, oldest first.
    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError>;
}

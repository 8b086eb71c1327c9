use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, MessageSender};

/// Simulates a store that cannot be reached.
pub struct UnavailableConversationRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::ConnectionFailed("store unavailable".to_string())
}

#[async_trait::async_trait]
impl ConversationRepository for UnavailableConversationRepository {
    async fn create_conversation(&self) -> Result<Conversation, RepositoryError> {
        Err(unavailable())
    }

    async fn get_conversation(
        &self,
        _id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Err(unavailable())
    }

    async fn append_message(
        &self,
        _conversation_id: ConversationId,
        _sender: MessageSender,
        _text: &str,
    ) -> Result<Message, RepositoryError> {
        Err(unavailable())
    }

    async fn list_recent_messages(
        &self,
        _conversation_id: ConversationId,
        _limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(unavailable())
    }

    async fn list_messages(
        &self,
        _conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(unavailable())
    }
}

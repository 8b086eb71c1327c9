use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, MessageSender};

/// Process-local store with the same ordering and foreign-key semantics as the
/// PostgreSQL adapter. Messages are kept in insertion order.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    state: RwLock<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    conversations: HashMap<ConversationId, Conversation>,
    messages: Vec<Message>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn conversation_count(&self) -> usize {
        self.state.read().await.conversations.len()
    }

    pub async fn message_count(&self) -> usize {
        self.state.read().await.messages.len()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create_conversation(&self) -> Result<Conversation, RepositoryError> {
        let conversation = Conversation::new();
        self.state
            .write()
            .await
            .conversations
            .insert(conversation.id, conversation.clone());
        Ok(conversation)
    }

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.state.read().await.conversations.get(&id).cloned())
    }

    async fn append_message(
        &self,
        conversation_id: ConversationId,
        sender: MessageSender,
        text: &str,
    ) -> Result<Message, RepositoryError> {
        let mut state = self.state.write().await;

        if !state.conversations.contains_key(&conversation_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "conversation {} does not exist",
                conversation_id
            )));
        }

        let message = Message::new(conversation_id, sender, text.to_string());
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn list_recent_messages(
        &self,
        conversation_id: ConversationId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut messages = self.list_messages(conversation_id).await?;
        let skip = messages.len().saturating_sub(limit);
        Ok(messages.split_off(skip))
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut messages: Vec<Message> = self
            .state
            .read()
            .await
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();

        // stable sort keeps insertion order for equal timestamps
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }
}

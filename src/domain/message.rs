use super::{ConversationId, MessageId, MessageSender};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: MessageSender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(conversation_id: ConversationId, sender: MessageSender, text: String) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            sender,
            text,
            created_at: Utc::now(),
        }
    }
}

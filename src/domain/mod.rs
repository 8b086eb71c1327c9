mod conversation;
mod conversation_id;
mod message;
mod message_id;
mod message_sender;
mod message_text;
mod policy_document;

pub use conversation::Conversation;
pub use conversation_id::ConversationId;
pub use message::Message;
pub use message_id::MessageId;
pub use message_sender::MessageSender;
pub use message_text::{MAX_MESSAGE_CHARS, MessageText, MessageTextError};
pub use policy_document::PolicyDocument;

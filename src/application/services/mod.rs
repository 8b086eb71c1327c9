mod chat_service;
mod reply_generator;

pub use chat_service::{ChatError, ChatReply, ChatService, DEFAULT_HISTORY_LIMIT};
pub use reply_generator::{
    DEFAULT_EMPTY_REPLY_FALLBACK, DEFAULT_ERROR_REPLY_FALLBACK, ReplyGenerator,
};

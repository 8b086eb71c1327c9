mod chat;
mod error;
mod health;
mod history;

pub use chat::{
    INVALID_REQUEST_BODY, MESSAGE_REQUIRED, PostMessageRequest, PostMessageResponse,
    post_message_handler,
};
pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE, SESSION_NOT_FOUND_MESSAGE};
pub use health::{LIVENESS_MESSAGE, health_handler, root_handler};
pub use history::{
    HistoryQuery, HistoryResponse, MessageDto, SESSION_ID_REQUIRED, history_handler,
};

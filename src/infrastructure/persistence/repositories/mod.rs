mod in_memory_conversation_repository;
mod mock_repository;
mod pg_conversation_repository;

pub use in_memory_conversation_repository::InMemoryConversationRepository;
pub use mock_repository::UnavailableConversationRepository;
pub use pg_conversation_repository::PgConversationRepository;

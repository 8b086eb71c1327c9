use support_chat::application::ports::{ConversationRepository, RepositoryError};
use support_chat::domain::{ConversationId, MessageSender};
use support_chat::infrastructure::persistence::InMemoryConversationRepository;

#[tokio::test]
async fn given_new_conversation_when_retrieving_then_it_exists() {
    let repository = InMemoryConversationRepository::new();

    let conversation = repository.create_conversation().await.unwrap();
    let retrieved = repository
        .get_conversation(conversation.id)
        .await
        .unwrap()
        .expect("conversation should exist");

    assert_eq!(retrieved, conversation);
}

#[tokio::test]
async fn given_unknown_id_when_retrieving_then_returns_none() {
    let repository = InMemoryConversationRepository::new();

    let result = repository
        .get_conversation(ConversationId::new())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_missing_conversation_when_appending_then_returns_constraint_violation() {
    let repository = InMemoryConversationRepository::new();

    let result = repository
        .append_message(ConversationId::new(), MessageSender::User, "hello")
        .await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(repository.message_count().await, 0);
}

#[tokio::test]
async fn given_many_messages_when_listing_recent_then_returns_last_n_oldest_first() {
    let repository = InMemoryConversationRepository::new();
    let conversation = repository.create_conversation().await.unwrap();
    for i in 0..5 {
        repository
            .append_message(conversation.id, MessageSender::User, &format!("Message {}", i))
            .await
            .unwrap();
    }

    let recent = repository
        .list_recent_messages(conversation.id, 3)
        .await
        .unwrap();

    let texts: Vec<&str> = recent.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["Message 2", "Message 3", "Message 4"]);
}

#[tokio::test]
async fn given_two_conversations_when_listing_then_messages_do_not_leak() {
    let repository = InMemoryConversationRepository::new();
    let first = repository.create_conversation().await.unwrap();
    let second = repository.create_conversation().await.unwrap();
    repository
        .append_message(first.id, MessageSender::User, "first")
        .await
        .unwrap();
    repository
        .append_message(second.id, MessageSender::User, "second")
        .await
        .unwrap();

    let messages = repository.list_messages(first.id).await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "first");
    assert_eq!(messages[0].conversation_id, first.id);
}

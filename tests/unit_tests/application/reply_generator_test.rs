use std::sync::Arc;

use support_chat::application::services::{
    DEFAULT_EMPTY_REPLY_FALLBACK, DEFAULT_ERROR_REPLY_FALLBACK, ReplyGenerator,
};
use support_chat::domain::{ConversationId, Message, MessageSender, PolicyDocument};
use support_chat::infrastructure::llm::MockLlmClient;

const TEST_FAQ: &str = "Q: Do you ship to the USA?\nA: Yes, in 5-8 business days.\n";

fn test_policy() -> PolicyDocument {
    PolicyDocument {
        name: "storefront".to_string(),
        product_description: "Spur, an outdoor gear store".to_string(),
        faq: TEST_FAQ.to_string(),
        refusal_instructions: "Only answer from the FAQ. Refuse unrelated questions.".to_string(),
    }
}

fn conversation(turns: &[(MessageSender, &str)]) -> Vec<Message> {
    let conversation_id = ConversationId::new();
    turns
        .iter()
        .map(|(sender, text)| Message::new(conversation_id, *sender, text.to_string()))
        .collect()
}

#[test]
fn given_history_when_building_prompt_then_contains_policy_and_labelled_turns() {
    let generator = ReplyGenerator::new(Arc::new(MockLlmClient::default()), test_policy());
    let history = conversation(&[
        (MessageSender::User, "Hi"),
        (MessageSender::Ai, "Hello! How can I help?"),
        (MessageSender::User, "Do you ship to the USA?"),
    ]);

    let prompt = generator.build_prompt(&history);

    assert!(prompt.contains("Spur, an outdoor gear store"));
    assert!(prompt.contains("Only answer from the FAQ. Refuse unrelated questions."));
    assert!(prompt.contains(TEST_FAQ));
    assert!(prompt.contains(
        "Customer: Hi\nSupport: Hello! How can I help?\nCustomer: Do you ship to the USA?\n"
    ));
    assert!(prompt.trim_end().ends_with("Support:"));
}

#[test]
fn given_history_when_building_prompt_then_faq_precedes_conversation() {
    let generator = ReplyGenerator::new(Arc::new(MockLlmClient::default()), test_policy());
    let history = conversation(&[(MessageSender::User, "What about returns?")]);

    let prompt = generator.build_prompt(&history);

    let faq_at = prompt.find(TEST_FAQ).unwrap();
    let turn_at = prompt.find("Customer: What about returns?").unwrap();
    assert!(faq_at < turn_at);
}

#[test]
fn given_empty_history_when_building_prompt_then_still_contains_faq() {
    let generator = ReplyGenerator::new(Arc::new(MockLlmClient::default()), test_policy());

    let prompt = generator.build_prompt(&[]);

    assert!(prompt.contains(TEST_FAQ));
    assert!(!prompt.contains("Customer:"));
}

#[tokio::test]
async fn given_model_reply_when_generating_then_returns_trimmed_text_and_sends_prompt() {
    let llm_client = Arc::new(MockLlmClient::replying("  Yes, we ship to the USA.\n"));
    let generator = ReplyGenerator::new(Arc::clone(&llm_client), test_policy());
    let history = conversation(&[(MessageSender::User, "Do you ship to the USA?")]);

    let reply = generator.generate_reply(&history).await;

    assert_eq!(reply, "Yes, we ship to the USA.");
    let prompts = llm_client.recorded_prompts().await;
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0], generator.build_prompt(&history));
}

#[tokio::test]
async fn given_failing_model_when_generating_then_returns_error_fallback() {
    let llm_client = Arc::new(MockLlmClient::failing());
    let generator = ReplyGenerator::new(Arc::clone(&llm_client), test_policy());
    let history = conversation(&[(MessageSender::User, "Hello?")]);

    let reply = generator.generate_reply(&history).await;

    assert_eq!(reply, DEFAULT_ERROR_REPLY_FALLBACK);
    assert_eq!(llm_client.recorded_prompts().await.len(), 1);
}

#[tokio::test]
async fn given_model_without_text_when_generating_then_returns_empty_fallback() {
    let generator = ReplyGenerator::new(Arc::new(MockLlmClient::empty()), test_policy());
    let history = conversation(&[(MessageSender::User, "Hello?")]);

    let reply = generator.generate_reply(&history).await;

    assert_eq!(reply, DEFAULT_EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn given_blank_model_reply_when_generating_then_returns_empty_fallback() {
    let generator = ReplyGenerator::new(Arc::new(MockLlmClient::replying("   ")), test_policy());

    let reply = generator.generate_reply(&[]).await;

    assert_eq!(reply, DEFAULT_EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn given_custom_fallbacks_when_generating_then_uses_them() {
    let failing = ReplyGenerator::new(Arc::new(MockLlmClient::failing()), test_policy())
        .with_error_reply_fallback("We'll be right back.");
    let empty = ReplyGenerator::new(Arc::new(MockLlmClient::empty()), test_policy())
        .with_empty_reply_fallback("Could you rephrase that?");

    assert_eq!(failing.generate_reply(&[]).await, "We'll be right back.");
    assert_eq!(empty.generate_reply(&[]).await, "Could you rephrase that?");
}

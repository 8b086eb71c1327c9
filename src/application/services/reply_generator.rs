use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Message, PolicyDocument};

pub const DEFAULT_EMPTY_REPLY_FALLBACK: &str =
    "Sorry, I couldn't come up with an answer to that. Could you rephrase your question?";
pub const DEFAULT_ERROR_REPLY_FALLBACK: &str =
    "Sorry, I'm having trouble responding right now. Please try again in a moment.";

/// Turns the policy document plus recent history into a prompt and asks the model for the
/// next support reply.
pub struct ReplyGenerator<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    policy: PolicyDocument,
    empty_reply_fallback: String,
    error_reply_fallback: String,
}

impl<L> ReplyGenerator<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, policy: PolicyDocument) -> Self {
        Self {
            llm_client,
            policy,
            empty_reply_fallback: DEFAULT_EMPTY_REPLY_FALLBACK.to_string(),
            error_reply_fallback: DEFAULT_ERROR_REPLY_FALLBACK.to_string(),
        }
    }

    /// Reply used when the model answers with no text.
    pub fn with_empty_reply_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.empty_reply_fallback = fallback.into();
        self
    }

    /// Reply used when the model call fails.
    pub fn with_error_reply_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.error_reply_fallback = fallback.into();
        self
    }

    pub fn policy(&self) -> &PolicyDocument {
        &self.policy
    }

    pub fn build_prompt(&self, history: &[Message]) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "You are a friendly customer support assistant for {}.\n",
            self.policy.product_description.trim()
        ));
        prompt.push_str(self.policy.refusal_instructions.trim());
        prompt.push_str("\n\n");

        prompt.push_str("FAQ:\n");
        prompt.push_str(&self.policy.faq);
        if !self.policy.faq.ends_with('\n') {
            prompt.push('\n');
        }
        prompt.push('\n');

        prompt.push_str("Conversation so far:\n");
        for message in history {
            prompt.push_str(&format!(
                "{}: {}\n",
                message.sender.prompt_label(),
                message.text
            ));
        }
        prompt.push('\n');
        prompt.push_str("Support:");

        prompt
    }

    /// Never fails: model errors and empty output are replaced by fixed fallbacks.
    #[tracing::instrument(skip(self, history), fields(policy = %self.policy.name, history_len = history.len()))]
    pub async fn generate_reply(&self, history: &[Message]) -> String {
        let prompt = self.build_prompt(history);

        match self.llm_client.complete(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(LlmClientError::EmptyResponse) => {
                tracing::warn!("Model returned no text, using fallback reply");
                self.empty_reply_fallback.clone()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reply generation failed, using fallback reply");
                self.error_reply_fallback.clone()
            }
        }
    }
}

use tokio::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

enum MockBehavior {
    Reply(String),
    Empty,
    Fail,
}

/// Test double that records every prompt it is given.
pub struct MockLlmClient {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    pub fn empty() -> Self {
        Self::with_behavior(MockBehavior::Empty)
    }

    pub fn failing() -> Self {
        Self::with_behavior(MockBehavior::Fail)
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub async fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::replying("Mock answer")
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().await.push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Empty => Err(LlmClientError::EmptyResponse),
            MockBehavior::Fail => Err(LlmClientError::ApiRequestFailed(
                "mock failure".to_string(),
            )),
        }
    }
}

use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ChatService;
use crate::presentation::config::Settings;

/// Handles shared by every request. Built once at startup and injected into the router.
pub struct AppState<L>
where
    L: LlmClient,
{
    pub chat_service: Arc<ChatService<L>>,
    pub settings: Option<Arc<Settings>>,
}

impl<L> AppState<L>
where
    L: LlmClient,
{
    pub fn new(chat_service: Arc<ChatService<L>>) -> Self {
        Self {
            chat_service,
            settings: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(Arc::new(settings));
        self
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}

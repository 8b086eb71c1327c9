use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;
use crate::domain::PolicyDocument;
use crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub chat: ChatSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub policies: HashMap<String, PolicySettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub frontend_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub history_limit: usize,
    pub active_policy: String,
    #[serde(default)]
    pub empty_reply_fallback: Option<String>,
    #[serde(default)]
    pub error_reply_fallback: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicySettings {
    pub product_description: String,
    pub faq: String,
    pub refusal_instructions: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("missing required setting `{key}` (set {env_var})")]
    Missing {
        key: &'static str,
        env_var: &'static str,
    },
    #[error("unknown policy `{0}`; configured policies: {1}")]
    UnknownPolicy(String, String),
}

impl Settings {
    /// Loads `base` and `<environment>` files from `config_dir`, then `APP_*` variables,
    /// then the plain `DATABASE_URL`, `GEMINI_API_KEY` and `PORT` variables.
    pub fn load(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000_i64)?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.run_migrations", true)?
            .set_default("llm.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("llm.model", "gemini-1.5-flash")?
            .set_default("chat.history_limit", 10_i64)?
            .set_default("chat.active_policy", "storefront")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("llm.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option(
                "server.port",
                std::env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok()),
            )?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reads `APP_ENVIRONMENT`, defaulting to `local`.
    pub fn environment_from_env() -> Result<Environment, SettingsError> {
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()
            .map_err(SettingsError::InvalidEnvironment)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.database.url.trim().is_empty() {
            return Err(SettingsError::Missing {
                key: "database.url",
                env_var: "DATABASE_URL",
            });
        }

        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::Missing {
                key: "llm.api_key",
                env_var: "GEMINI_API_KEY",
            });
        }

        self.policy_document().map(|_| ())
    }

    /// Resolves `chat.active_policy` against the configured policy documents.
    pub fn policy_document(&self) -> Result<PolicyDocument, SettingsError> {
        let name = &self.chat.active_policy;
        let policy = self.policies.get(name).ok_or_else(|| {
            let mut known: Vec<&str> = self.policies.keys().map(String::as_str).collect();
            known.sort_unstable();
            SettingsError::UnknownPolicy(name.clone(), known.join(", "))
        })?;

        Ok(PolicyDocument {
            name: name.clone(),
            product_description: policy.product_description.clone(),
            faq: policy.faq.clone(),
            refusal_instructions: policy.refusal_instructions.clone(),
        })
    }
}

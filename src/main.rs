use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use support_chat::application::ports::ConversationRepository;
use support_chat::application::services::{ChatService, ReplyGenerator};
use support_chat::infrastructure::llm::GeminiClient;
use support_chat::infrastructure::observability::{TracingConfig, init_tracing};
use support_chat::infrastructure::persistence::{
    PgConversationRepository, create_pool, run_migrations,
};
use support_chat::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Settings::environment_from_env()?;
    let config_dir = std::env::var("APP_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("configuration"));
    let settings = Settings::load(&config_dir, environment)
        .context("Failed to load configuration")?;

    init_tracing(
        &TracingConfig::new(
            environment.as_str(),
            settings.logging.level.clone(),
            settings.logging.json,
        ),
        settings.server.port,
    );

    let policy = settings.policy_document()?;
    tracing::info!(policy = %policy.name, model = %settings.llm.model, "Configuration loaded");

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if settings.database.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let conversation_repository: Arc<dyn ConversationRepository> =
        Arc::new(PgConversationRepository::new(pool));

    let llm_client = Arc::new(
        GeminiClient::new(
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            settings.llm.request_timeout(),
        )?
        .with_base_url(settings.llm.base_url.clone()),
    );

    let mut reply_generator = ReplyGenerator::new(Arc::clone(&llm_client), policy);
    if let Some(fallback) = settings.chat.empty_reply_fallback.clone() {
        reply_generator = reply_generator.with_empty_reply_fallback(fallback);
    }
    if let Some(fallback) = settings.chat.error_reply_fallback.clone() {
        reply_generator = reply_generator.with_error_reply_fallback(fallback);
    }

    let chat_service = Arc::new(ChatService::new(
        conversation_repository,
        reply_generator,
        settings.chat.history_limit,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(chat_service).with_settings(settings);
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

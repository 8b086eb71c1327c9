use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, history_handler, post_message_handler, root_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let frontend_dir = state
        .settings
        .as_ref()
        .and_then(|settings| settings.server.frontend_dir.clone());

    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat/message", post(post_message_handler::<L>))
        .route("/chat/history", get(history_handler::<L>));

    if let Some(dir) = frontend_dir {
        tracing::info!(frontend_dir = %dir.display(), "Serving browser frontend at /app");
        router = router.nest_service(
            "/app",
            ServeDir::new(dir).append_index_html_on_directories(true),
        );
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

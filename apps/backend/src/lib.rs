pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use lingolens_core::{LearnerSettings, Vocabulary};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::history::HistoryStore;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<RwLock<LearnerSettings>>,
    pub vocabulary: Arc<RwLock<Vocabulary>>,
    pub history: Arc<HistoryStore>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            settings: Arc::new(RwLock::new(config.default_settings)),
            vocabulary: Arc::new(RwLock::new(Vocabulary::new())),
            history: Arc::new(HistoryStore::new(config.history_limit)),
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Settings routes
        .route(
            "/api/settings",
            get(routes::settings::get).put(routes::settings::update),
        )
        // Analysis, vocabulary and history routes
        .route("/api/analysis", post(routes::analysis::submit))
        .route(
            "/api/vocabulary",
            get(routes::vocabulary::list).delete(routes::vocabulary::clear),
        )
        .route(
            "/api/history",
            get(routes::history::list).delete(routes::history::clear),
        )
        // Quiz routes
        .route("/api/quiz", post(routes::quiz::start))
        .route(
            "/api/quiz/:id",
            get(routes::quiz::current).delete(routes::quiz::abandon),
        )
        .route("/api/quiz/:id/answer", post(routes::quiz::answer))
        .route("/api/quiz/:id/advance", post(routes::quiz::advance))
        // Pronunciation routes
        .route(
            "/api/pronunciation",
            post(routes::pronunciation::evaluate_attempt),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        "Default language {}, confidence threshold {}",
        config.default_settings.language,
        config.default_settings.confidence_threshold
    );

    let state = AppState::new(&config);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

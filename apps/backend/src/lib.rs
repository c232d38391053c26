pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::SynonymIndex;

use crate::config::Config;
use crate::db::Database;

/// Synonym data shipped with the service.
pub const BUNDLED_SYNONYMS: &str = include_str!("../data/synonyms.json");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub synonyms: Arc<SynonymIndex>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let synonyms = load_synonyms(&config)?;
    tracing::info!("Loaded synonyms for {} words", synonyms.len());

    let state = AppState {
        db: Arc::new(db),
        synonyms: Arc::new(synonyms),
    };

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Load synonym data from `SYNONYMS_PATH`, or the bundled data when unset.
pub fn load_synonyms(config: &Config) -> anyhow::Result<SynonymIndex> {
    let index = match &config.synonyms_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read synonyms from {}", path.display()))?;
            SynonymIndex::from_json(&json)
                .with_context(|| format!("failed to parse synonyms from {}", path.display()))?
        }
        None => SynonymIndex::from_json(BUNDLED_SYNONYMS).context("invalid bundled synonyms")?,
    };
    Ok(index)
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        // Word routes
        .route("/api/words", get(routes::words::list).post(routes::words::create))
        .route("/api/words/:id", get(routes::words::get).put(routes::words::update))
        .route("/api/words/:id/favorite", post(routes::words::toggle_favorite))
        .route("/api/words/:id/answers", get(routes::words::answers))
        // Study routes
        .route("/api/study/next", get(routes::study::next))
        .route("/api/study/check", post(routes::study::check))
        // Stats routes
        .route("/api/stats", get(routes::stats::get));

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

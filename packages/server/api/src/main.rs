use anyhow::Context;
use axum::{http, routing::get, Json, Router};
use differential::application::DiagnosisService;
use dotenv::dotenv;
use serde_json::json;
use tower_http::trace::TraceLayer;

mod config;
mod handlers;
mod router;
mod state;

use config::ApiConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let config = ApiConfig::from_env()?;

    // Load the catalog and build the inference context
    let catalog_path = config.catalog_path.clone();
    let service = tokio::task::spawn_blocking(move || DiagnosisService::load(catalog_path))
        .await??
        .with_default_limit(config.default_top_n);

    let app_state = AppState::new(service);

    // Setup CORS
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<http::HeaderValue>()
                .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?,
        )
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(router::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start Server
    tracing::info!("Differential API listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

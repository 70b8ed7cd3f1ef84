//! Books API Server
//!
//! Serves the in-memory book catalog over HTTP.

use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use books_api::{api, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("books_api={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Books API v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState::new(config);
    let count = state.services.books.count()?;
    tracing::info!("Book store ready with {} books", count);

    let app = api::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Books API server is running on http://{}", addr);
    tracing::info!("Available endpoints:");
    for (method, path, summary) in api::ENDPOINTS {
        tracing::info!("  {:<6} {:<10} - {}", method, path, summary);
    }

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

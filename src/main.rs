use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

use tokenlogo_backend::api::{create_logo_router, LogoApiState};
use tokenlogo_backend::config::ResolverConfig;
use tokenlogo_backend::resolver::{HttpListSource, SymbolResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ResolverConfig::default();
    info!(
        "✅ Resolver configured: {} aggregated lists, {} chain asset lists, chains {:?}",
        config.aggregated_list_urls.len(),
        config.chain_asset_lists.len(),
        config.allowed_chain_ids
    );

    let list_source = Arc::new(HttpListSource::new());
    let resolver = Arc::new(SymbolResolver::new(list_source, config));
    info!("✅ Symbol resolver initialized");

    // Separate client for the image pipe-through; logo hosts can be slow.
    let image_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("TokenLogoResolver/1.0")
        .build()?;

    let state = LogoApiState::new(resolver, image_client);

    // Build our application with routes
    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_logo_router().with_state(state))
        .layer(CorsLayer::permissive());

    info!("🔧 Routes configured:");
    info!("  - /api/logo/:symbol (logo image pipe-through)");
    info!("  - /api/resolve/:symbol (resolution details)");
    info!("  - /health");

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("🚀 Starting server on 0.0.0.0:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

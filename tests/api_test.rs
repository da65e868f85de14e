use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum::{routing::get, Router};
use axum_test::TestServer;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use tokenlogo_backend::api::{create_logo_router, LogoApiState};
use tokenlogo_backend::config::{ChainAssetList, ResolverConfig};
use tokenlogo_backend::resolver::{ListSource, SourceError, SymbolResolver};
use tokenlogo_backend::types::{ChainAsset, Token};

/// List source where every endpoint is down. Enough for router-level tests:
/// custom-image symbols resolve without it, everything else surfaces the
/// outage.
struct DownListSource;

#[async_trait]
impl ListSource for DownListSource {
    async fn fetch_aggregated(&self, url: &str) -> Result<Vec<Token>, SourceError> {
        Err(SourceError::InvalidResponse(format!(
            "simulated outage for {}",
            url
        )))
    }

    async fn fetch_chain_assets(&self, url: &str) -> Result<Vec<ChainAsset>, SourceError> {
        Err(SourceError::InvalidResponse(format!(
            "simulated outage for {}",
            url
        )))
    }
}

fn test_app() -> Router {
    let config = ResolverConfig {
        aggregated_list_urls: vec!["https://lists.test/a.tokenlist.json".to_string()],
        allowed_chain_ids: vec![137],
        chain_asset_lists: vec![ChainAssetList {
            name: "smartchain".to_string(),
            url: "https://assets.test/smartchain/tokenlist.json".to_string(),
        }],
    };
    let resolver = Arc::new(SymbolResolver::new(Arc::new(DownListSource), config));
    let state = LogoApiState::new(resolver, reqwest::Client::new());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", create_logo_router().with_state(state))
        .layer(CorsLayer::permissive())
}

#[tokio::test]
async fn health_returns_ok() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://app.example"),
        )
        .await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("CORS header missing"),
        "*"
    );
}

#[tokio::test]
async fn resolve_endpoint_returns_resolution_json() {
    let server = TestServer::new(test_app()).unwrap();

    // Custom image entry: resolvable even with every upstream list down.
    let response = server.get("/api/resolve/r4Belt").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["query"], "r4Belt");
    assert_eq!(body["symbol"], "r4Belt");
    assert_eq!(body["logo_uri"], "https://s.belt.fi/info/R4BELT@2x.png");
    assert_eq!(body["source"], "custom");
}

#[tokio::test]
async fn resolve_endpoint_maps_list_outage_to_bad_gateway() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server.get("/api/resolve/CAKE").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("smartchain"));
}

#[tokio::test]
async fn logo_endpoint_maps_list_outage_to_bad_gateway() {
    let server = TestServer::new(test_app()).unwrap();

    let response = server.get("/api/logo/CAKE").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::resolver::{Resolution, SymbolResolver};

/// Advisory caching for proxied logo bytes; the symbol-to-logo mapping moves
/// rarely enough that stale serves are acceptable.
const LOGO_CACHE_CONTROL: &str = "s-maxage=360000, stale-while-revalidate";

#[derive(Clone)]
pub struct LogoApiState {
    pub resolver: Arc<SymbolResolver>,
    pub http_client: reqwest::Client,
}

impl LogoApiState {
    pub fn new(resolver: Arc<SymbolResolver>, http_client: reqwest::Client) -> Self {
        Self {
            resolver,
            http_client,
        }
    }
}

pub fn create_logo_router() -> Router<LogoApiState> {
    Router::new()
        .route("/logo/:symbol", get(get_token_logo))
        .route("/resolve/:symbol", get(resolve_symbol))
}

/// Resolve a symbol and report the outcome without fetching the image.
async fn resolve_symbol(
    State(state): State<LogoApiState>,
    Path(symbol): Path<String>,
) -> Result<Json<Resolution>, (StatusCode, Json<serde_json::Value>)> {
    match state.resolver.resolve(&symbol).await {
        Ok(resolution) => Ok(Json(resolution)),
        Err(e) => {
            error!("Failed to resolve {}: {}", symbol, e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": e.to_string()})),
            ))
        }
    }
}

/// Resolve a symbol and stream the logo image bytes through. The upstream
/// image status passes through untouched; only list failures map to 502.
async fn get_token_logo(
    State(state): State<LogoApiState>,
    Path(symbol): Path<String>,
) -> Response {
    let resolution = match state.resolver.resolve(&symbol).await {
        Ok(resolution) => resolution,
        Err(e) => {
            error!("Failed to resolve {}: {}", symbol, e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "upstream token list unavailable"})),
            )
                .into_response();
        }
    };

    info!(
        "Serving logo for {} ({}) from {}",
        symbol, resolution.source, resolution.logo_uri
    );

    let upstream = match state.http_client.get(&resolution.logo_uri).send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            error!("Logo fetch from {} failed: {}", resolution.logo_uri, e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "logo image unavailable"})),
            )
                .into_response();
        }
    };

    // reqwest and axum sit on different http versions, so status and
    // content-type cross the boundary by value.
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| HeaderValue::from_str(v).ok());

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(LOGO_CACHE_CONTROL),
    );
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }

    response
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::types::{ChainAsset, Token};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Access to the upstream token list endpoints. The resolver only ever
/// talks to this trait, so tests can substitute a canned implementation.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch one aggregated multi-chain token list.
    async fn fetch_aggregated(&self, url: &str) -> Result<Vec<Token>, SourceError>;

    /// Fetch one single-chain canonical asset list.
    async fn fetch_chain_assets(&self, url: &str) -> Result<Vec<ChainAsset>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct TokenListResponse {
    tokens: Vec<Token>,
}

#[derive(Debug, Deserialize)]
struct AssetListResponse {
    tokens: Vec<ChainAsset>,
}

/// `ListSource` over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpListSource {
    client: Client,
}

impl HttpListSource {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent("TokenLogoResolver/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_list_body(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        // Strip a potential BOM before parsing; some list hosts serve one.
        Ok(body.trim().trim_start_matches('\u{feff}').to_string())
    }
}

impl Default for HttpListSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch_aggregated(&self, url: &str) -> Result<Vec<Token>, SourceError> {
        let body = self.fetch_list_body(url).await?;
        let list: TokenListResponse = serde_json::from_str(&body)
            .map_err(|e| SourceError::InvalidResponse(format!("no usable tokens array: {}", e)))?;
        Ok(list.tokens)
    }

    async fn fetch_chain_assets(&self, url: &str) -> Result<Vec<ChainAsset>, SourceError> {
        let body = self.fetch_list_body(url).await?;
        let list: AssetListResponse = serde_json::from_str(&body)?;
        Ok(list.tokens)
    }
}

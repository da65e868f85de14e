use futures::future;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::sources::{ListSource, SourceError};
use super::tables::{custom_image, rewrite_symbol};
use crate::config::{ChainAssetList, ResolverConfig};
use crate::types::{ChainAsset, Token};

/// A canonical asset list could not be fetched. Aggregated list failures are
/// absorbed as empty contributions and never surface here.
#[derive(Debug, thiserror::Error)]
#[error("canonical asset list {name} unavailable: {source}")]
pub struct ResolveError {
    pub name: String,
    #[source]
    pub source: SourceError,
}

/// Outcome of a symbol resolution. `logo_uri` is always populated; a symbol
/// no list knows still resolves, to the generic fallback image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Symbol as queried.
    pub query: String,
    /// Symbol after applying the rewrite table.
    pub symbol: String,
    pub logo_uri: String,
    /// Which stage produced the match: "custom", a chain asset list name,
    /// "tokenlist", or "fallback".
    pub source: String,
}

/// Resolves a token symbol to a logo URL.
///
/// Lookup order, first match wins: static override table, the configured
/// single-chain asset lists in sequence, then the aggregated token lists
/// merged across sources. No match falls back to a deterministic
/// generic-image URL, so resolution only fails when a canonical asset list
/// itself is unreachable.
pub struct SymbolResolver {
    source: Arc<dyn ListSource>,
    config: ResolverConfig,
}

impl SymbolResolver {
    pub fn new(source: Arc<dyn ListSource>, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    pub async fn resolve(&self, query: &str) -> Result<Resolution, ResolveError> {
        let canonical = rewrite_symbol(query);

        if let Some(url) = custom_image(canonical) {
            debug!("Custom image override for {}", canonical);
            return Ok(self.resolution(query, canonical, url.to_string(), "custom"));
        }

        for list in &self.config.chain_asset_lists {
            if let Some(asset) = self.search_chain_assets(list, canonical).await? {
                info!(
                    "Resolved {} via {} asset list: {}",
                    canonical, list.name, asset.logo_uri
                );
                return Ok(self.resolution(query, canonical, asset.logo_uri, &list.name));
            }
        }

        if let Some(token) = self.search_token_lists(canonical).await {
            if let Some(uri) = token.logo_uri {
                info!("Resolved {} via aggregated token lists: {}", canonical, uri);
                return Ok(self.resolution(query, canonical, uri, "tokenlist"));
            }
        }

        let fallback = fallback_url(canonical);
        debug!("No list match for {}, using fallback {}", canonical, fallback);
        Ok(self.resolution(query, canonical, fallback, "fallback"))
    }

    /// Search one single-chain canonical asset list. Exact symbol match is
    /// preferred; lowercase equality catches casing drift between lists.
    async fn search_chain_assets(
        &self,
        list: &ChainAssetList,
        symbol: &str,
    ) -> Result<Option<ChainAsset>, ResolveError> {
        let assets = self
            .source
            .fetch_chain_assets(&list.url)
            .await
            .map_err(|source| ResolveError {
                name: list.name.clone(),
                source,
            })?;

        debug!("Searching {} assets from {} list", assets.len(), list.name);

        if let Some(asset) = assets.iter().find(|a| a.symbol == symbol) {
            return Ok(Some(asset.clone()));
        }

        let lowered = symbol.to_lowercase();
        Ok(assets
            .into_iter()
            .find(|a| a.symbol.to_lowercase() == lowered))
    }

    async fn search_token_lists(&self, symbol: &str) -> Option<Token> {
        let tokens = self.fetch_merged_token_lists().await;
        tokens.into_iter().find(|t| t.symbol == symbol)
    }

    /// Fetch every configured aggregated list concurrently, keep only entries
    /// on allowed chains, and merge with first-seen-wins de-duplication by
    /// `(chain_id, address)`. A failed or malformed source contributes
    /// nothing rather than aborting the merge.
    pub async fn fetch_merged_token_lists(&self) -> Vec<Token> {
        let results = future::join_all(
            self.config
                .aggregated_list_urls
                .iter()
                .map(|url| self.source.fetch_aggregated(url)),
        )
        .await;

        let mut seen: HashSet<(u64, String)> = HashSet::new();
        let mut merged = Vec::new();

        for (url, result) in self.config.aggregated_list_urls.iter().zip(results) {
            let tokens = match result {
                Ok(tokens) => tokens,
                Err(e) => {
                    warn!("Token list {} contributed nothing: {}", url, e);
                    continue;
                }
            };

            for token in tokens {
                if !self.config.allowed_chain_ids.contains(&token.chain_id) {
                    continue;
                }
                if seen.insert((token.chain_id, token.address.clone())) {
                    merged.push(token);
                }
            }
        }

        debug!("Merged {} unique tokens across aggregated lists", merged.len());
        merged
    }

    fn resolution(&self, query: &str, symbol: &str, logo_uri: String, source: &str) -> Resolution {
        Resolution {
            query: query.to_string(),
            symbol: symbol.to_string(),
            logo_uri,
            source: source.to_string(),
        }
    }
}

/// Deterministic generic-image URL used when no list knows the symbol.
pub fn fallback_url(symbol: &str) -> String {
    format!("https://farm.army/token/{}.webp", symbol.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_lowercases_symbol() {
        assert_eq!(
            fallback_url("UNKNOWNTOKEN123"),
            "https://farm.army/token/unknowntoken123.webp"
        );
    }
}

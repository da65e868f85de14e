/// A single-chain canonical asset list endpoint.
#[derive(Debug, Clone)]
pub struct ChainAssetList {
    pub name: String,
    pub url: String,
}

/// Resolver configuration: which upstream lists are consulted and which
/// chains the aggregated lists are filtered to.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Aggregated multi-chain token list endpoints, fetched concurrently.
    pub aggregated_list_urls: Vec<String>,
    /// Chain IDs kept when filtering aggregated list entries.
    pub allowed_chain_ids: Vec<u64>,
    /// Single-chain canonical asset lists, searched sequentially in order.
    pub chain_asset_lists: Vec<ChainAssetList>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            aggregated_list_urls: vec![
                "https://unpkg.com/@sushiswap/default-token-list/build/sushiswap-default.tokenlist.json".to_string(),
                "https://unpkg.com/quickswap-default-token-list/build/quickswap-default.tokenlist.json".to_string(),
                "https://unpkg.com/@cometh-game/default-token-list/build/comethswap-default.tokenlist.json".to_string(),
            ],
            allowed_chain_ids: vec![137], // Polygon
            chain_asset_lists: vec![
                ChainAssetList {
                    name: "smartchain".to_string(),
                    url: "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/smartchain/tokenlist.json".to_string(),
                },
                ChainAssetList {
                    name: "ethereum".to_string(),
                    url: "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/tokenlist.json".to_string(),
                },
            ],
        }
    }
}

use serde::{Deserialize, Serialize};

/// Entry from an aggregated multi-chain token list (Uniswap token list format).
///
/// Neither `symbol` nor `address` is unique across chains; entries are only
/// distinguishable by the `(chain_id, address)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
}

/// Entry from a single-chain canonical asset list (Trust Wallet format).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainAsset {
    pub asset: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}

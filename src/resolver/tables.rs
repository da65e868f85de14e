use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Aliases mapped to the canonical symbol used for every lookup.
/// Wrapped or bridged assets resolve to the logo of the underlying asset.
static TOKEN_REWRITES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("beltBTC", "BTC"),
        ("BTC", "btcb"),
        ("BNB", "wbnb"),
        ("pAUTO", "AUTO"),
        ("QUICK", "Quick"),
    ])
});

/// Known-good logo URLs for symbols the public lists get wrong or miss.
/// A hit here bypasses every network lookup.
static CUSTOM_IMAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("r4Belt", "https://s.belt.fi/info/R4BELT@2x.png"),
        ("LAUNCH", "https://superlauncher.io/img/coin/launch.svg"),
        ("MRF", "https://superlauncher.io/img/project/mrf/mrf-logo.svg"),
        ("CIFI", "https://superlauncher.io/img/project/cifi/cifi-logo.svg"),
        ("BYG", "https://superlauncher.io/img/project/black-eye-galaxy-logo.png"),
        (
            "C98",
            "https://assets.trustwalletapp.com/blockchains/smartchain/assets/0xaEC945e04baF28b135Fa7c640f624f8D90F1C3a6/logo.png",
        ),
    ])
});

/// Canonical symbol for an incoming query symbol. Symbols without a rewrite
/// entry are already canonical.
pub fn rewrite_symbol(symbol: &str) -> &str {
    TOKEN_REWRITES.get(symbol).copied().unwrap_or(symbol)
}

/// Logo override for a canonical symbol, if one is configured.
pub fn custom_image(symbol: &str) -> Option<&'static str> {
    CUSTOM_IMAGES.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_known_aliases() {
        assert_eq!(rewrite_symbol("BTC"), "btcb");
        assert_eq!(rewrite_symbol("beltBTC"), "BTC");
        assert_eq!(rewrite_symbol("BNB"), "wbnb");
    }

    #[test]
    fn passes_through_unknown_symbols() {
        assert_eq!(rewrite_symbol("CAKE"), "CAKE");
    }

    #[test]
    fn custom_image_lookup() {
        assert_eq!(
            custom_image("r4Belt"),
            Some("https://s.belt.fi/info/R4BELT@2x.png")
        );
        assert_eq!(custom_image("CAKE"), None);
    }
}

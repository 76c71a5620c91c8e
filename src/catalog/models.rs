//! Token models

use serde::Deserialize;

/// Catalog record as it appears in `tokens.json`, before enrichment.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawToken {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "assetId")]
    pub asset_id: String,
}

/// A token of the catalog, enriched with its logo reference.
///
/// `symbol` and `asset_id` are each unique across the catalog; the registry
/// enforces this at construction. `logo` is `None` when the logo table has
/// no entry for the symbol, and the UI falls back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbol: String,
    pub asset_id: String,
    pub name: String,
    pub decimals: u8,
    pub logo: Option<&'static str>,
}

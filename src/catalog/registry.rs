//! Token registry built from the bundled catalog
//!
//! The catalog source is a JSON object keyed by an internal identifier;
//! building the registry walks it in its native key order, attaches each
//! token's logo, and indexes the resulting list by symbol and by asset id.
//! Duplicate symbols or asset ids in the source fail the build; missing
//! logos do not.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::logos::logo_for;
use super::models::{RawToken, Token};

/// Bundled catalog source, compiled into the crate.
const RAW_TOKENS: &str = include_str!("tokens.json");

/// Errors building a [`TokenRegistry`] from catalog JSON
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog root is not a JSON object of token records")]
    MalformedCatalog,

    #[error("duplicate symbol in catalog: '{symbol}'")]
    DuplicateSymbol { symbol: String },

    #[error("duplicate asset id in catalog: '{asset_id}'")]
    DuplicateAssetId { asset_id: String },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered token list plus by-symbol and by-asset-id indexes.
///
/// Built once from static data and read-only afterwards. The indexes hold
/// positions into the list, so a lookup always returns the exact entry the
/// list holds.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    by_symbol: FxHashMap<String, usize>,
    by_asset_id: FxHashMap<String, usize>,
}

/// Global registry built from the bundled catalog.
///
/// The bundled data is duplicate-free and well-formed; failing to build
/// from it means the crate itself shipped broken, so initialization panics
/// the same way unreadable bundled config does elsewhere in the app.
pub static TOKENS: Lazy<TokenRegistry> = Lazy::new(|| {
    let registry = TokenRegistry::from_json(RAW_TOKENS).expect("bundled tokens.json is invalid");
    tracing::info!(tokens = registry.len(), "token registry initialized");
    registry
});

impl TokenRegistry {
    /// Build a registry from catalog JSON.
    ///
    /// The token list keeps the source's native key order. Fails on
    /// malformed JSON or on a duplicate symbol / asset id.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let root: serde_json::Value = serde_json::from_str(raw)?;
        let records = root.as_object().ok_or(CatalogError::MalformedCatalog)?;

        let mut tokens = Vec::with_capacity(records.len());
        for record in records.values() {
            let raw_token: RawToken = serde_json::from_value(record.clone())?;
            tokens.push(Token {
                logo: logo_for(&raw_token.symbol),
                symbol: raw_token.symbol,
                asset_id: raw_token.asset_id,
                name: raw_token.name,
                decimals: raw_token.decimals,
            });
        }
        tracing::debug!(tokens = tokens.len(), "parsed token catalog");

        let mut by_symbol = FxHashMap::default();
        let mut by_asset_id = FxHashMap::default();
        for (idx, token) in tokens.iter().enumerate() {
            if by_symbol.insert(token.symbol.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    symbol: token.symbol.clone(),
                });
            }
            if by_asset_id.insert(token.asset_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateAssetId {
                    asset_id: token.asset_id.clone(),
                });
            }
        }

        Ok(Self {
            tokens,
            by_symbol,
            by_asset_id,
        })
    }

    /// All tokens in catalog order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up a token by its symbol (e.g. "ETH").
    pub fn by_symbol(&self, symbol: &str) -> Option<&Token> {
        self.by_symbol.get(symbol).map(|&idx| &self.tokens[idx])
    }

    /// Look up a token by its on-chain asset id.
    pub fn by_asset_id(&self, asset_id: &str) -> Option<&Token> {
        self.by_asset_id.get(asset_id).map(|&idx| &self.tokens[idx])
    }

    /// Number of tokens in the catalog.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over all tokens in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

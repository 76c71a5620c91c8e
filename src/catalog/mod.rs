//! Token catalog module
//!
//! This module contains the token side of the app configuration:
//! - The bundled catalog source (`tokens.json`)
//! - The symbol -> logo lookup
//! - The derived [`TokenRegistry`] with its by-symbol and by-asset-id indexes

pub mod logos;
pub mod models;
pub mod registry;

// Re-export commonly used items
pub use logos::logo_for;
pub use models::Token;
pub use registry::{CatalogError, TOKENS, TokenRegistry};

//! Fuelend Config - Static configuration registry for the Fuelend frontend
//!
//! Everything the web app needs to know before it talks to the chain:
//! navigation routes, the token catalog, network endpoints, the demo wallet
//! and the deployed contract addresses. All of it is bundled static data;
//! the only work done at load time is building the token registry indexes.
//!
//! # Modules
//!
//! - [`routes`] - Logical route names and their URL paths
//! - [`catalog`] - Token catalog and the derived lookup registry
//! - [`network`] - Node, explorer and faucet endpoint URLs
//! - [`wallet`] - Demo seed credentials
//! - [`contracts`] - Versioned contract address bundles

pub mod catalog;
pub mod contracts;
pub mod network;
pub mod routes;
pub mod wallet;

// Convenient re-exports at crate root
pub use catalog::{CatalogError, Token, TokenRegistry, TOKENS, logo_for};
pub use contracts::{CONTRACT_ADDRESSES, ContractsConfig, LATEST_VERSION, contracts_for, latest};
pub use network::{EXPLORER_URL, FAUCET_URL, NODE_URL};
pub use wallet::{SEED, SEED_ADDRESS};

//! Network endpoints for the beta-3 testnet deployment.

/// GraphQL endpoint of the Fuel node the app queries.
pub const NODE_URL: &str = "https://beta-3.fuel.network/graphql";

/// Block explorer the app links transactions to.
pub const EXPLORER_URL: &str = "https://fuellabs.github.io/block-explorer-v2/beta-3";

/// Testnet faucet used by the faucet page.
pub const FAUCET_URL: &str = "https://faucet-beta-3.fuel.network";

//! Frontend navigation routes
//!
//! Route names are stable identifiers referenced by the router and the nav
//! components; the values are the URL paths.

pub const ROOT: &str = "/";
pub const FAUCET: &str = "/faucet";
pub const DASHBOARD: &str = "/dashboard";
pub const WALLET: &str = "/wallet";

/// All routes in navigation order as `(name, path)` pairs.
pub const ALL: [(&str, &str); 4] = [
    ("ROOT", ROOT),
    ("FAUCET", FAUCET),
    ("DASHBOARD", DASHBOARD),
    ("WALLET", WALLET),
];

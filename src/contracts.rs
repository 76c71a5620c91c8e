//! Deployed contract addresses, keyed by deployment version
//!
//! Each release of the market contracts gets a version entry here; the app
//! resolves the bundle for the version it was built against (normally the
//! latest) and never mixes addresses across versions.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Addresses of one contract deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractsConfig {
    pub price_oracle: &'static str,
    pub market: &'static str,
}

/// Version whose bundle [`latest`] resolves to.
pub const LATEST_VERSION: &str = "0.1";

/// Deployment version -> contract address bundle.
pub static CONTRACT_ADDRESSES: Lazy<FxHashMap<&'static str, ContractsConfig>> = Lazy::new(|| {
    let mut addresses = FxHashMap::default();
    addresses.insert(
        "0.1",
        ContractsConfig {
            price_oracle: "0x4bf2826201fb74fc479a6a785cb70f2ce8e45b67010acfd47906993d130a21ff",
            market: "0xe367deeb25692058b0ac88107a893fbf508c59ec9128de0c33c6fec74f6d149e",
        },
    );
    addresses
});

/// Get the contract bundle for a deployment version.
pub fn contracts_for(version: &str) -> Option<&'static ContractsConfig> {
    CONTRACT_ADDRESSES.get(version)
}

/// Get the contract bundle for [`LATEST_VERSION`].
pub fn latest() -> &'static ContractsConfig {
    contracts_for(LATEST_VERSION).expect("contract address map is missing its latest version")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v01_addresses() {
        let config = contracts_for("0.1").unwrap();
        assert_eq!(
            config.price_oracle,
            "0x4bf2826201fb74fc479a6a785cb70f2ce8e45b67010acfd47906993d130a21ff"
        );
        assert_eq!(
            config.market,
            "0xe367deeb25692058b0ac88107a893fbf508c59ec9128de0c33c6fec74f6d149e"
        );
    }

    #[test]
    fn test_latest_matches_latest_version() {
        assert_eq!(Some(latest()), contracts_for(LATEST_VERSION));
    }

    #[test]
    fn test_unknown_version() {
        assert!(contracts_for("0.0").is_none());
        assert!(contracts_for("").is_none());
    }

    #[test]
    fn test_each_version_has_one_bundle() {
        assert_eq!(CONTRACT_ADDRESSES.len(), 1);
    }
}

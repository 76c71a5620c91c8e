//! End-to-end checks of the public configuration surface.

use fuelend_config::{LATEST_VERSION, TOKENS, contracts_for, latest, logo_for, routes};

#[test]
fn every_listed_token_is_indexed_by_symbol_and_asset_id() {
    assert!(!TOKENS.is_empty());
    for token in TOKENS.tokens() {
        assert_eq!(TOKENS.by_symbol(&token.symbol), Some(token));
        assert_eq!(TOKENS.by_asset_id(&token.asset_id), Some(token));
    }
}

#[test]
fn token_list_covers_the_bundled_catalog() {
    assert_eq!(TOKENS.len(), 7);
    assert_eq!(TOKENS.tokens().len(), TOKENS.len());

    // ETH leads the catalog and is the chain's base asset
    let eth = &TOKENS.tokens()[0];
    assert_eq!(eth.symbol, "ETH");
    assert_eq!(
        eth.asset_id,
        "0x0000000000000000000000000000000000000000000000000000000000000000"
    );
    assert_eq!(eth.decimals, 9);

    let usdc = TOKENS.by_symbol("USDC").unwrap();
    assert_eq!(usdc.decimals, 6);
    let btc = TOKENS.by_symbol("BTC").unwrap();
    assert_eq!(btc.decimals, 8);
}

#[test]
fn token_logos_match_the_lookup() {
    for token in TOKENS.iter() {
        assert_eq!(token.logo, logo_for(&token.symbol));
    }
}

#[test]
fn route_table_is_stable() {
    assert_eq!(routes::ROOT, "/");
    assert_eq!(routes::FAUCET, "/faucet");
    assert_eq!(routes::DASHBOARD, "/dashboard");
    assert_eq!(routes::WALLET, "/wallet");
}

#[test]
fn contract_addresses_match_the_deployment() {
    let config = contracts_for("0.1").expect("0.1 deployment must be configured");
    assert_eq!(
        config.price_oracle,
        "0x4bf2826201fb74fc479a6a785cb70f2ce8e45b67010acfd47906993d130a21ff"
    );
    assert_eq!(
        config.market,
        "0xe367deeb25692058b0ac88107a893fbf508c59ec9128de0c33c6fec74f6d149e"
    );
    assert_eq!(Some(latest()), contracts_for(LATEST_VERSION));
}

#[test]
fn endpoints_and_demo_wallet_are_well_formed() {
    assert!(fuelend_config::NODE_URL.starts_with("https://"));
    assert!(fuelend_config::EXPLORER_URL.starts_with("https://"));
    assert!(fuelend_config::FAUCET_URL.starts_with("https://"));

    // 512-bit seed, hex encoded with 0x prefix
    assert!(fuelend_config::SEED.starts_with("0x"));
    assert_eq!(fuelend_config::SEED.len(), 2 + 128);
    assert!(fuelend_config::SEED_ADDRESS.starts_with("fuel1"));
}

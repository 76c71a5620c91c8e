//! Symbol -> logo lookup
//!
//! Logo assets ship with the frontend bundle; the paths here are resolved
//! by the app's static file routing. A symbol without an entry is not an
//! error, the token just renders without a logo.

/// Look up the bundled logo asset for a token symbol.
pub fn logo_for(symbol: &str) -> Option<&'static str> {
    let path = match symbol {
        "ETH" => "/assets/tokens/eth.svg",
        "USDC" => "/assets/tokens/usdc.svg",
        "LINK" => "/assets/tokens/link.svg",
        "BTC" => "/assets/tokens/btc.svg",
        "UNI" => "/assets/tokens/uni.svg",
        "SWAY" => "/assets/tokens/sway.svg",
        "COMP" => "/assets/tokens/comp.svg",
        _ => return None,
    };
    Some(path)
}

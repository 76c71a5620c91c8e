//! Demo wallet credentials
//!
//! A throwaway testnet wallet shown in the demo build so users can poke at
//! the app without connecting their own. Holds faucet tokens only.

pub const SEED: &str = "0x3c930502838f1da408d93665b78c4fc00b884c0128fff900d05b4def71a3da4335d029828ba0a62c26f3563bcd52b0deec84d1014373a1722610d411611c3771";

pub const SEED_ADDRESS: &str = "fuel1pln6n26y4e8lrgcaqctp8mddhvgzgt44pc9ychark93ks9mk7yxqr63nle";

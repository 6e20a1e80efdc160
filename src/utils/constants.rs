use alloy::primitives::{address, Address};

/// Canonical wrapped-ether contract on Ethereum mainnet
pub const WETH_ADDRESS: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// Canonical wrapped-matic contract on Polygon mainnet
pub const WMATIC_ADDRESS: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");

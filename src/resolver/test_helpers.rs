use std::str::FromStr;

use alloy::primitives::{Address, U256};

use crate::models::token::{SupportedChainId, Token};
use crate::sync::reserves::ReserveResult;

/// USDC on Polygon
pub fn usdc() -> Token {
    Token::new(
        SupportedChainId::Polygon,
        Address::from_str("0x2791bca1f2de4661ed88a30c99a7a9449aa84174").unwrap(),
        6,
        Some("USDC"),
    )
}

/// WMATIC on Polygon
pub fn wmatic() -> Token {
    SupportedChainId::Polygon.wrapped_native()
}

/// WETH on Ethereum mainnet, for cross-chain cases
pub fn mainnet_weth() -> Token {
    SupportedChainId::Mainnet.wrapped_native()
}

/// A settled reserve result with the given raw reserves
pub fn loaded(reserve0: u64, reserve1: u64) -> ReserveResult {
    ReserveResult::ready(U256::from(reserve0), U256::from(reserve1))
}

/// A settled reserve result with no reserves
pub fn absent() -> ReserveResult {
    ReserveResult::absent()
}

/// A reserve result still in flight
pub fn in_flight() -> ReserveResult {
    ReserveResult::in_flight()
}

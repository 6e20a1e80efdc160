//! Runtime configuration sourced from the environment.

use std::env;

use crate::models::token::SupportedChainId;

/// Fallback RPC endpoint when none is configured
const DEFAULT_RPC_URL: &str = "https://polygon-rpc.com";

/// Runtime configuration for the resolver.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP RPC endpoint for reserve reads
    pub rpc_url: String,
    /// The selected network
    pub chain_id: SupportedChainId,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Reads `PAIRLENS_RPC_URL` and `PAIRLENS_CHAIN_ID`; missing or
    /// unsupported values fall back to the Polygon mainnet defaults.
    #[must_use]
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let rpc_url =
            env::var("PAIRLENS_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_owned());
        let chain_id = env::var("PAIRLENS_CHAIN_ID")
            .ok()
            .and_then(|value| value.parse().ok())
            .and_then(SupportedChainId::from_id)
            .unwrap_or_default();

        Self { rpc_url, chain_id }
    }
}

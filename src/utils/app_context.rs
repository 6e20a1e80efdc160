//! Application context for pair-state resolution.
//!
//! Holds the pieces the resolver needs from its environment: the RPC
//! provider used for reserve reads, the active chain id, and the exchange
//! registry. The active chain is plain data here rather than a reactive
//! store; callers rebuild or swap the context when the selected network
//! changes.

use alloy::network::Ethereum;
use alloy::providers::RootProvider;
use eyre::{Error, Result};

use crate::config::Config;
use crate::models::token::SupportedChainId;
use crate::registry::ExchangeRegistry;
use crate::utils::providers::create_http_provider;

/// Shared environment for the resolver.
pub struct AppContext {
    /// RPC provider for reserve reads
    pub provider: RootProvider<Ethereum>,
    /// The currently selected network
    pub chain_id: SupportedChainId,
    /// Exchanges known to the resolver
    pub registry: ExchangeRegistry,
}

impl AppContext {
    /// Creates a new application context from the environment.
    ///
    /// # Returns
    /// * `Result<Self, Error>` - The initialized context or an error
    ///
    /// # Errors
    /// * If the provider connection fails
    pub fn new() -> Result<Self, Error> {
        let config = Config::from_env();
        Self::from_config(&config)
    }

    /// Creates a new application context from an explicit configuration.
    ///
    /// # Errors
    /// * If the RPC URL is invalid or the provider cannot be built
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            provider: create_http_provider(config)?,
            chain_id: config.chain_id,
            registry: ExchangeRegistry::with_defaults(),
        })
    }
}

use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use eyre::{Error, Result};
use url::Url;

use crate::config::Config;

/// Creates a new HTTP provider for Ethereum-compatible RPC communication
///
/// # Arguments
/// * `config` - Runtime configuration holding the RPC endpoint
///
/// # Returns
/// A root provider connected to the configured endpoint
///
/// # Errors
/// * If the RPC URL cannot be parsed
/// * If provider initialization fails
pub fn create_http_provider(config: &Config) -> Result<RootProvider<Ethereum>, Error> {
    let url = Url::parse(&config.rpc_url)?;
    let provider = ProviderBuilder::new().on_http(url);
    Ok((*provider.root()).clone())
}

//! Command-line front end for the pair-state resolver.

use std::str::FromStr;

use alloy::primitives::Address;
use clap::{Parser, Subcommand};
use eyre::{Error, Result};
use log::info;
use serde_json::json;

use pairlens::models::token::{Currency, Token};
use pairlens::resolver::resolve_pairs;
use pairlens::utils::app_context::AppContext;
use pairlens::utils::logger::setup_logger;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// List configured exchanges for the active chain
    Exchanges,
    /// Resolve the on-chain state of a single pair
    Pair {
        /// Exchange name, e.g. "quickswap"
        name: String,
        /// First token address
        token_a: String,
        /// Second token address
        token_b: String,
        /// Decimals of the first token
        #[arg(long, default_value_t = 18)]
        decimals_a: u8,
        /// Decimals of the second token
        #[arg(long, default_value_t = 18)]
        decimals_b: u8,
    },
}

/// Print the exchanges configured for the context's chain
fn list_exchanges(ctx: &AppContext) {
    println!("Exchanges on chain {}:", ctx.chain_id);
    for name in ctx.registry.names(ctx.chain_id) {
        println!("  {name}");
    }
}

/// Resolve one pair and print its state as JSON
async fn resolve_single_pair(
    ctx: &AppContext,
    name: &str,
    token_a: &str,
    token_b: &str,
    decimals_a: u8,
    decimals_b: u8,
) -> Result<(), Error> {
    let currency_a = Currency::Erc20(Token::new(
        ctx.chain_id,
        Address::from_str(token_a)?,
        decimals_a,
        None,
    ));
    let currency_b = Currency::Erc20(Token::new(
        ctx.chain_id,
        Address::from_str(token_b)?,
        decimals_b,
        None,
    ));

    info!("Resolving {token_a}/{token_b} on {name}");
    let states = resolve_pairs(ctx, name, &[(Some(currency_a), Some(currency_b))]).await;
    let (state, pool) = states
        .into_iter()
        .next()
        .unwrap_or((pairlens::resolver::PairState::Invalid, None));

    let output = json!({
        "state": state,
        "pair": pool.map(|pool| json!({
            "address": pool.address().to_string(),
            "token0": pool.token0().address().to_string(),
            "token1": pool.token1().address().to_string(),
            "reserve0": pool.reserve0().raw().to_string(),
            "reserve1": pool.reserve1().raw().to_string(),
        })),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logger()?;

    let ctx = AppContext::new()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Pair {
            name,
            token_a,
            token_b,
            decimals_a,
            decimals_b,
        }) => {
            resolve_single_pair(&ctx, &name, &token_a, &token_b, decimals_a, decimals_b).await?;
        }
        Some(Commands::Exchanges) | None => {
            list_exchanges(&ctx);
        }
    }

    Ok(())
}

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::RootProvider;
use alloy::sol;
use futures_util::future::join_all;

use crate::utils::app_context::AppContext;

sol!(
    #[sol(rpc)]
    contract IUniswapV2Pair {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
);

/// Reserves of a pair as reported by `getReserves`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reserves {
    /// Reserve of token0
    pub reserve0: U256,
    /// Reserve of token1
    pub reserve1: U256,
}

/// Per-address outcome of a batched reserve read.
///
/// `loading` is false for the RPC reader in this module, which awaits every
/// call to completion; executors that report in-flight state set it and the
/// classifier honors it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveResult {
    /// Whether the read is still in flight
    pub loading: bool,
    /// The decoded reserves, when the call succeeded
    pub result: Option<Reserves>,
}

impl ReserveResult {
    /// A settled read that produced no reserves
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            loading: false,
            result: None,
        }
    }

    /// A read still in flight
    #[must_use]
    pub const fn in_flight() -> Self {
        Self {
            loading: true,
            result: None,
        }
    }

    /// A settled read with reserves
    #[must_use]
    pub const fn ready(reserve0: U256, reserve1: U256) -> Self {
        Self {
            loading: false,
            result: Some(Reserves { reserve0, reserve1 }),
        }
    }
}

/// Read `getReserves` across a list of optional pair addresses.
///
/// One `ReserveResult` per input, order preserved. `None` entries are
/// unresolvable pairs: they produce an empty result without touching the
/// network. Per-address RPC failures (including calls to addresses with no
/// deployed pair) are logged and folded into empty results, so the output
/// length always equals the input length.
pub async fn fetch_reserves(
    ctx: &AppContext,
    pair_addresses: &[Option<Address>],
) -> Vec<ReserveResult> {
    log::info!(
        "sync::reserves: Fetching reserves for {} pairs ({} resolvable)",
        pair_addresses.len(),
        pair_addresses.iter().filter(|address| address.is_some()).count()
    );

    let calls = pair_addresses.iter().map(|pair_address| async move {
        match pair_address {
            Some(pair) => read_reserves(&ctx.provider, *pair).await,
            None => ReserveResult::absent(),
        }
    });

    join_all(calls).await
}

/// Read the reserves of a single pair, folding call failures into an
/// empty result
async fn read_reserves(provider: &RootProvider<Ethereum>, pair: Address) -> ReserveResult {
    let contract = IUniswapV2Pair::new(pair, provider);
    match contract.getReserves().call().await {
        Ok(reserves) => ReserveResult::ready(
            reserves.reserve0.to::<U256>(),
            reserves.reserve1.to::<U256>(),
        ),
        Err(e) => {
            log::error!("sync::reserves: getReserves failed for {pair}: {e}");
            ReserveResult::absent()
        }
    }
}

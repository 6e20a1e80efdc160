/// Batched on-chain reserve reads
///
/// This module contains the batched `getReserves` reader the resolver
/// uses to settle pair states.
pub mod reserves;

pub use reserves::{fetch_reserves, ReserveResult, Reserves};

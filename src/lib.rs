/*!
 * # Pairlens - DEX Pair State Resolution
 *
 * Pairlens derives liquidity-pool state (existence, reserves) for pairs of
 * tradable assets on constant-product exchanges, for consumption by a
 * price-quoting UI. It resolves deterministic pool addresses from token
 * pairs, fetches on-chain reserve data in batch, and classifies each pair's
 * state.
 *
 * ## Core Features
 *
 * - **Address Derivation**: CREATE2 pool addresses from factory metadata,
 *   with no network call
 * - **Batched Reserve Reads**: one `getReserves` fan-out across all
 *   resolvable pairs
 * - **State Classification**: every requested pair maps to exactly one of
 *   `Loading`, `NotExists`, `Exists`, or `Invalid`
 *
 * ## Module Structure
 *
 * - `config`: Configuration management for the resolver
 * - `models`: Token, currency, amount, and pair value objects
 * - `registry`: Per-network exchange registry and address derivation
 * - `resolver`: The pair-state resolution pipeline
 * - `sync`: Blockchain reserve-read components
 * - `utils`: Utility functions and helpers
 */

/// Configuration management for the resolver
pub mod config;
/// Data models for the application
pub mod models;
/// Per-network exchange registry
pub mod registry;
/// Pair-state resolution pipeline
pub mod resolver;
/// Blockchain reserve-read components
pub mod sync;
/// Utility functions and helpers
pub mod utils;

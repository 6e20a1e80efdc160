//! Per-network exchange registry.
//!
//! Maps (chain id, exchange name) to the metadata needed to derive pool
//! addresses without a network call: factory addresses per chain, the
//! factory's init-code hash, and the address-computation function itself.

use std::collections::HashMap;

use alloy::primitives::{address, b256, keccak256, Address, B256};

use crate::models::token::SupportedChainId;

/// Uniswap V2 pair init-code hash, shared by its direct forks (QuickSwap)
const UNISWAP_V2_INIT_CODE_HASH: B256 =
    b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// SushiSwap pair init-code hash
const SUSHISWAP_INIT_CODE_HASH: B256 =
    b256!("0xe18a34eb0e04b04f7a0ac29a6e80748dca96319b42c54d679cb821dca90c6303");

/// Signature of a deterministic pool-address derivation.
///
/// Implementations must canonicalize token order themselves so callers get
/// the same address for (A, B) and (B, A).
pub type PairAddressFn = fn(Address, B256, Address, Address) -> Address;

/// Derive a CREATE2 pool address the way constant-product factories do:
/// salt is the keccak of the two token addresses in canonical order.
#[must_use]
pub fn create2_pair_address(
    factory: Address,
    init_code_hash: B256,
    token_a: Address,
    token_b: Address,
) -> Address {
    let (token0, token1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_slice());
    packed[20..].copy_from_slice(token1.as_slice());
    factory.create2(keccak256(packed), init_code_hash)
}

/// Metadata for one exchange across the chains it is deployed on.
#[derive(Debug, Clone)]
pub struct ExchangeInfo {
    /// Registry key, e.g. "quickswap"
    name: &'static str,
    /// Factory contract per chain
    factory_addresses: HashMap<SupportedChainId, Address>,
    /// Init-code hash of the factory's pair contract
    init_code_hash: B256,
    /// Pool-address derivation for this exchange
    compute_pair_address: PairAddressFn,
}

impl ExchangeInfo {
    /// Create a new exchange entry using the standard CREATE2 derivation
    fn new(
        name: &'static str,
        init_code_hash: B256,
        factories: &[(SupportedChainId, Address)],
    ) -> Self {
        Self {
            name,
            factory_addresses: factories.iter().copied().collect(),
            init_code_hash,
            compute_pair_address: create2_pair_address,
        }
    }

    /// Registry key of the exchange
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Init-code hash of the factory's pair contract
    #[must_use]
    pub const fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// The exchange's factory on the given chain, when deployed there
    #[must_use]
    pub fn factory(&self, chain_id: SupportedChainId) -> Option<Address> {
        self.factory_addresses.get(&chain_id).copied()
    }

    /// Derive the pool address for two tokens on the given chain.
    ///
    /// Returns `None` when the exchange has no factory on that chain. The
    /// derivation is order-independent in the token arguments.
    #[must_use]
    pub fn pair_address(
        &self,
        chain_id: SupportedChainId,
        token_a: Address,
        token_b: Address,
    ) -> Option<Address> {
        self.factory(chain_id).map(|factory| {
            (self.compute_pair_address)(factory, self.init_code_hash, token_a, token_b)
        })
    }
}

/// All exchanges known to the resolver, grouped by chain.
///
/// Registration order within a chain is significant: the first entry is the
/// default exchange for single-pair lookups.
#[derive(Debug, Clone)]
pub struct ExchangeRegistry {
    /// Exchanges per chain, in registration order
    by_chain: HashMap<SupportedChainId, Vec<ExchangeInfo>>,
}

impl ExchangeRegistry {
    /// The built-in registry: QuickSwap and SushiSwap on Polygon,
    /// Uniswap V2 and SushiSwap on Ethereum mainnet.
    #[must_use]
    pub fn with_defaults() -> Self {
        let quickswap_factory = address!("0x5757371414417b8C6CAad45bAeF941aBc7d3Ab32");
        let uniswap_v2_factory = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
        let sushiswap_factory = address!("0xc35DADB65012eC5796536bD9864eD8773aBc74C4");

        let mut by_chain = HashMap::new();
        by_chain.insert(
            SupportedChainId::Polygon,
            vec![
                ExchangeInfo::new(
                    "quickswap",
                    UNISWAP_V2_INIT_CODE_HASH,
                    &[(SupportedChainId::Polygon, quickswap_factory)],
                ),
                ExchangeInfo::new(
                    "sushiswap",
                    SUSHISWAP_INIT_CODE_HASH,
                    &[(SupportedChainId::Polygon, sushiswap_factory)],
                ),
            ],
        );
        by_chain.insert(
            SupportedChainId::Mainnet,
            vec![
                ExchangeInfo::new(
                    "uniswap",
                    UNISWAP_V2_INIT_CODE_HASH,
                    &[(SupportedChainId::Mainnet, uniswap_v2_factory)],
                ),
                ExchangeInfo::new(
                    "sushiswap",
                    SUSHISWAP_INIT_CODE_HASH,
                    &[(SupportedChainId::Mainnet, sushiswap_factory)],
                ),
            ],
        );
        Self { by_chain }
    }

    /// Look up an exchange by name on the given chain
    #[must_use]
    pub fn get(&self, chain_id: SupportedChainId, name: &str) -> Option<&ExchangeInfo> {
        self.by_chain
            .get(&chain_id)?
            .iter()
            .find(|exchange| exchange.name == name)
    }

    /// The default (first registered) exchange for the given chain
    #[must_use]
    pub fn first_exchange(&self, chain_id: SupportedChainId) -> Option<&ExchangeInfo> {
        self.by_chain.get(&chain_id)?.first()
    }

    /// Names of all exchanges configured for the given chain
    #[must_use]
    pub fn names(&self, chain_id: SupportedChainId) -> Vec<&'static str> {
        self.by_chain
            .get(&chain_id)
            .map(|exchanges| exchanges.iter().map(|exchange| exchange.name).collect())
            .unwrap_or_default()
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn usdc() -> Address {
        Address::from_str("0x2791bca1f2de4661ed88a30c99a7a9449aa84174").unwrap()
    }

    fn wmatic() -> Address {
        Address::from_str("0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270").unwrap()
    }

    #[test]
    fn test_create2_is_order_independent() {
        let factory = address!("0x5757371414417b8C6CAad45bAeF941aBc7d3Ab32");
        let forward = create2_pair_address(factory, UNISWAP_V2_INIT_CODE_HASH, usdc(), wmatic());
        let reversed = create2_pair_address(factory, UNISWAP_V2_INIT_CODE_HASH, wmatic(), usdc());
        assert_eq!(forward, reversed);
        assert_ne!(forward, Address::ZERO);
    }

    #[test]
    fn test_create2_known_mainnet_pair() {
        // The Uniswap V2 USDC/WETH pool
        let factory = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
        let usdc_mainnet =
            Address::from_str("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        let weth = Address::from_str("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
        let expected =
            Address::from_str("0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc").unwrap();
        assert_eq!(
            create2_pair_address(factory, UNISWAP_V2_INIT_CODE_HASH, usdc_mainnet, weth),
            expected
        );
    }

    #[test]
    fn test_lookup_known_exchange() {
        let registry = ExchangeRegistry::with_defaults();
        let quickswap = registry.get(SupportedChainId::Polygon, "quickswap").unwrap();
        assert!(quickswap.factory(SupportedChainId::Polygon).is_some());
        assert!(quickswap.factory(SupportedChainId::Mainnet).is_none());
    }

    #[test]
    fn test_lookup_unknown_or_empty_name() {
        let registry = ExchangeRegistry::with_defaults();
        assert!(registry.get(SupportedChainId::Polygon, "unknown-dex").is_none());
        assert!(registry.get(SupportedChainId::Polygon, "").is_none());
    }

    #[test]
    fn test_pair_address_differs_across_exchanges() {
        let registry = ExchangeRegistry::with_defaults();
        let quickswap = registry
            .get(SupportedChainId::Polygon, "quickswap")
            .unwrap()
            .pair_address(SupportedChainId::Polygon, usdc(), wmatic())
            .unwrap();
        let sushiswap = registry
            .get(SupportedChainId::Polygon, "sushiswap")
            .unwrap()
            .pair_address(SupportedChainId::Polygon, usdc(), wmatic())
            .unwrap();
        assert_ne!(quickswap, sushiswap);
    }

    #[test]
    fn test_first_exchange_is_registration_order() {
        let registry = ExchangeRegistry::with_defaults();
        assert_eq!(
            registry.first_exchange(SupportedChainId::Polygon).map(ExchangeInfo::name),
            Some("quickswap")
        );
        assert_eq!(
            registry.names(SupportedChainId::Polygon),
            vec!["quickswap", "sushiswap"]
        );
    }
}

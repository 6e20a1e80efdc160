use alloy::primitives::{Address, B256};

use super::amount::CurrencyAmount;
use super::token::Token;
use crate::registry::create2_pair_address;

/// A constant-product liquidity pool holding reserves of two tokens.
///
/// The pool orders its tokens canonically on construction: the lower-sorted
/// token is always token0, no matter which way the amounts were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The factory the pool was deployed from
    factory: Address,
    /// The init-code hash of the factory's pair contract
    init_code_hash: B256,
    /// Reserve of the lower-sorted token
    token0_amount: CurrencyAmount,
    /// Reserve of the higher-sorted token
    token1_amount: CurrencyAmount,
}

impl Pair {
    /// Build a pool from its factory parameters and two reserve amounts.
    ///
    /// The amounts may be given in either order; they are re-sorted by the
    /// canonical token order.
    #[must_use]
    pub fn new(
        factory: Address,
        init_code_hash: B256,
        amount_a: CurrencyAmount,
        amount_b: CurrencyAmount,
    ) -> Self {
        let (token0_amount, token1_amount) = if amount_a.token().sorts_before(amount_b.token()) {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        Self {
            factory,
            init_code_hash,
            token0_amount,
            token1_amount,
        }
    }

    /// The factory the pool was deployed from
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// The init-code hash of the factory's pair contract
    #[must_use]
    pub const fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// The lower-sorted token
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.token0_amount.token()
    }

    /// The higher-sorted token
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.token1_amount.token()
    }

    /// Reserve of token0
    #[must_use]
    pub const fn reserve0(&self) -> &CurrencyAmount {
        &self.token0_amount
    }

    /// Reserve of token1
    #[must_use]
    pub const fn reserve1(&self) -> &CurrencyAmount {
        &self.token1_amount
    }

    /// The pool's deterministic on-chain address
    #[must_use]
    pub fn address(&self) -> Address {
        create2_pair_address(
            self.factory,
            self.init_code_hash,
            self.token0().address(),
            self.token1().address(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::SupportedChainId;
    use alloy::primitives::{b256, U256};
    use std::str::FromStr;

    const INIT_CODE_HASH: B256 =
        b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

    fn factory() -> Address {
        Address::from_str("0x5757371414417b8c6caad45baef941abc7d3ab32").unwrap()
    }

    fn wmatic_amount(raw: u64) -> CurrencyAmount {
        let token = Token::new(
            SupportedChainId::Polygon,
            Address::from_str("0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270").unwrap(),
            18,
            Some("WMATIC"),
        );
        CurrencyAmount::from_raw_amount(token, U256::from(raw))
    }

    fn usdc_amount(raw: u64) -> CurrencyAmount {
        let token = Token::new(
            SupportedChainId::Polygon,
            Address::from_str("0x2791bca1f2de4661ed88a30c99a7a9449aa84174").unwrap(),
            6,
            Some("USDC"),
        );
        CurrencyAmount::from_raw_amount(token, U256::from(raw))
    }

    #[test]
    fn test_tokens_sorted_on_construction() {
        // WMATIC sorts before USDC by address
        let forward = Pair::new(factory(), INIT_CODE_HASH, wmatic_amount(1000), usdc_amount(2000));
        let reversed = Pair::new(factory(), INIT_CODE_HASH, usdc_amount(2000), wmatic_amount(1000));

        for pair in [&forward, &reversed] {
            assert_eq!(pair.token0().symbol(), Some("WMATIC"));
            assert_eq!(pair.token1().symbol(), Some("USDC"));
            assert_eq!(pair.reserve0().raw(), U256::from(1000));
            assert_eq!(pair.reserve1().raw(), U256::from(2000));
        }
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_address_is_order_independent() {
        let forward = Pair::new(factory(), INIT_CODE_HASH, wmatic_amount(1), usdc_amount(1));
        let reversed = Pair::new(factory(), INIT_CODE_HASH, usdc_amount(1), wmatic_amount(1));
        assert_eq!(forward.address(), reversed.address());
        assert_ne!(forward.address(), Address::ZERO);
    }
}

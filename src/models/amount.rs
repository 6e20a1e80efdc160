use alloy::primitives::U256;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use super::token::Token;

/// A raw token quantity attached to the token it denominates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    /// The token the amount is denominated in
    token: Token,
    /// The raw (unscaled) quantity
    raw: U256,
}

impl CurrencyAmount {
    /// Attach a raw on-chain quantity to a token
    #[must_use]
    pub fn from_raw_amount(token: Token, raw: U256) -> Self {
        Self { token, raw }
    }

    /// The token the amount is denominated in
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// The raw (unscaled) quantity
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// The quantity scaled by the token's decimals, for display
    #[must_use]
    pub fn to_decimal(&self) -> BigDecimal {
        let digits =
            BigInt::parse_bytes(self.raw.to_string().as_bytes(), 10).unwrap_or_default();
        BigDecimal::new(digits, i64::from(self.token.decimals()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::SupportedChainId;
    use alloy::primitives::Address;
    use std::str::FromStr;

    fn usdc() -> Token {
        Token::new(
            SupportedChainId::Polygon,
            Address::from_str("0x2791bca1f2de4661ed88a30c99a7a9449aa84174").unwrap(),
            6,
            Some("USDC"),
        )
    }

    #[test]
    fn test_raw_is_preserved() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), U256::from(1_500_000u64));
        assert_eq!(amount.raw(), U256::from(1_500_000u64));
        assert_eq!(amount.token(), &usdc());
    }

    #[test]
    fn test_decimal_scaling() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), U256::from(1_500_000u64));
        assert_eq!(amount.to_decimal(), BigDecimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_decimal_scaling_zero() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), U256::ZERO);
        assert_eq!(amount.to_decimal(), BigDecimal::from(0));
    }
}

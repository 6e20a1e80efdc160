/// Currency amounts attached to tokens
pub mod amount;
/// Pair (pool) value object
pub mod pair;
/// Token and currency value objects
pub mod token;

pub use amount::CurrencyAmount;
pub use pair::Pair;
pub use token::{Currency, SupportedChainId, Token};

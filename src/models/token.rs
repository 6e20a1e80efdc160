use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use alloy::primitives::Address;
use serde::Serialize;

use crate::utils::constants::{WETH_ADDRESS, WMATIC_ADDRESS};

/// Networks the resolver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum SupportedChainId {
    /// Ethereum mainnet (chain id 1)
    Mainnet,
    /// Polygon PoS mainnet (chain id 137)
    #[default]
    Polygon,
}

impl SupportedChainId {
    /// The numeric chain id as used on the wire
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Polygon => 137,
        }
    }

    /// Look up a supported chain by its numeric id
    #[must_use]
    pub const fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(Self::Mainnet),
            137 => Some(Self::Polygon),
            _ => None,
        }
    }

    /// The canonical wrapped-native token for this chain
    #[must_use]
    pub fn wrapped_native(self) -> Token {
        match self {
            Self::Mainnet => Token::new(self, WETH_ADDRESS, 18, Some("WETH")),
            Self::Polygon => Token::new(self, WMATIC_ADDRESS, 18, Some("WMATIC")),
        }
    }
}

impl Display for SupportedChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// An ERC-20 token.
///
/// Identity is (chain id, address). Decimals and symbol ride along for
/// display purposes and are excluded from equality, ordering and hashing.
#[derive(Debug, Clone)]
pub struct Token {
    /// The chain the token lives on
    chain_id: SupportedChainId,
    /// The token contract address
    address: Address,
    /// Number of decimals the token uses
    decimals: u8,
    /// Ticker symbol, when known
    symbol: Option<String>,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub fn new(
        chain_id: SupportedChainId,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(str::to_owned),
        }
    }

    /// The chain the token lives on
    #[must_use]
    pub const fn chain_id(&self) -> SupportedChainId {
        self.chain_id
    }

    /// The token contract address
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Number of decimals the token uses
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Ticker symbol, when known
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Whether this token sorts before `other` in the canonical order.
    ///
    /// The order is total over (chain id, address) so token0/token1
    /// assignment is deterministic no matter which way a pair is supplied.
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        (self.chain_id, self.address) < (other.chain_id, other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.chain_id, self.address).cmp(&(other.chain_id, other.address))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.address),
        }
    }
}

/// A tradable asset: either the chain's native coin or an ERC-20 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    /// The chain's native coin (ETH, MATIC)
    Native(SupportedChainId),
    /// An ERC-20 token
    Erc20(Token),
}

impl Currency {
    /// The canonical on-chain token representation of this currency.
    ///
    /// Native coins map to the chain's wrapped token; ERC-20 tokens map to
    /// themselves. Total, never fails.
    #[must_use]
    pub fn wrapped(&self) -> Token {
        match self {
            Self::Native(chain_id) => chain_id.wrapped_native(),
            Self::Erc20(token) => token.clone(),
        }
    }

    /// The chain the currency lives on
    #[must_use]
    pub const fn chain_id(&self) -> SupportedChainId {
        match self {
            Self::Native(chain_id) => *chain_id,
            Self::Erc20(token) => token.chain_id,
        }
    }
}

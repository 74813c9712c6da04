//! Token metadata, asset-identifying data and unit scaling.
//!
//! Raw token amounts are integer base-unit quantities carried as
//! `Decimal`; the helpers here convert between base units and
//! human-readable units using each token's decimal count.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ERC-20 asset data proxy id, as emitted by the 0x asset data encoder.
const ERC20_PROXY_ID: &str = "f47261b0";

/// Metadata for a tradeable token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Ticker symbol (e.g. "WETH", "DAI").
    pub symbol: String,
    /// Contract address, 0x-prefixed hex.
    pub address: String,
    /// Number of decimals in the base-unit representation.
    pub decimals: u32,
}

impl Token {
    pub fn new(symbol: impl Into<String>, address: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            address: address.into(),
            decimals,
        }
    }

    /// The encoded asset data blob identifying this token.
    pub fn asset_data(&self) -> AssetData {
        AssetData::erc20(&self.address)
    }
}

/// Opaque asset-identifying blob carried inside a signed order.
///
/// Only the ERC-20 encoding is understood: a 4-byte proxy id followed
/// by the token address left-padded to 32 bytes. Everything else is
/// kept verbatim and compares by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetData(String);

impl AssetData {
    /// Encode the asset data for an ERC-20 token address.
    pub fn erc20(address: &str) -> Self {
        let bare = address.trim_start_matches("0x").to_lowercase();
        Self(format!("0x{ERC20_PROXY_ID}{bare:0>64}"))
    }

    /// Wrap an already-encoded blob without interpreting it.
    pub fn raw(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    /// Decode the token address out of an ERC-20 asset data blob.
    ///
    /// Returns `None` when the blob does not carry the ERC-20 proxy id.
    pub fn token_address(&self) -> Option<String> {
        let bare = self.0.strip_prefix("0x")?;
        let payload = bare.strip_prefix(ERC20_PROXY_ID)?;
        if payload.len() < 40 {
            return None;
        }
        Some(format!("0x{}", &payload[payload.len() - 40..]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A trader's balance of a single token, with its lock (allowance) state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token: Token,
    /// Balance in base units.
    pub balance: Decimal,
    /// Whether the exchange proxy is currently approved to spend it.
    pub is_unlocked: bool,
}

fn pow10(decimals: u32) -> Decimal {
    // Token decimals above 28 are not representable in Decimal; every
    // mainstream ERC-20 uses 18 or fewer.
    Decimal::from_i128_with_scale(10i128.pow(decimals), 0)
}

/// Scale a base-unit amount into human-readable units.
pub fn token_amount_in_units(amount: Decimal, decimals: u32) -> Decimal {
    amount / pow10(decimals)
}

/// Scale a human-readable unit amount back into base units.
pub fn units_in_token_amount(units: Decimal, decimals: u32) -> Decimal {
    units * pow10(decimals)
}

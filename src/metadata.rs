//! # Token Metadata
//!
//! The descriptive half of the ledger: name, symbol, decimal precision,
//! and total supply. All four fields are fixed at construction and never
//! change for the lifetime of the ledger -- there is no mint, no burn, no
//! rename.
//!
//! The only computation here is the supply scaling: a user-facing whole
//! supply of `10000` at `18` decimals becomes an on-ledger total of
//! `10000 * 10^18` smallest units. The multiplication is checked; a supply
//! that does not fit in 256 bits fails construction.

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Immutable descriptive fields of a deployed token ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name (e.g., "My Token").
    name: String,
    /// Ticker symbol (e.g., "MTK").
    symbol: String,
    /// Decimal precision. The ledger never divides -- this scales the
    /// whole-unit initial supply once and otherwise only informs display.
    decimals: u8,
    /// Total supply in smallest units. Constant: the ledger neither mints
    /// nor burns after construction.
    total_supply: U256,
    /// Timestamp when the ledger was constructed.
    created_at: DateTime<Utc>,
}

impl TokenMetadata {
    /// Creates the metadata record, scaling `initial_supply_whole` by
    /// `10^decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ConstructionOverflow`] if the scaled supply
    /// does not fit in 256 bits.
    pub fn new(
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply_whole: u64,
    ) -> Result<Self, LedgerError> {
        let overflow = LedgerError::ConstructionOverflow {
            whole: initial_supply_whole,
            decimals,
        };

        let scale = U256::from(10)
            .checked_pow(U256::from(decimals))
            .ok_or_else(|| overflow.clone())?;
        let total_supply = U256::from(initial_supply_whole)
            .checked_mul(scale)
            .ok_or(overflow)?;

        Ok(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            total_supply,
            created_at: Utc::now(),
        })
    }

    /// The token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The decimal precision.
    pub fn decimal(&self) -> u8 {
        self.decimals
    }

    /// The total supply in smallest units.
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// When the ledger was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_whole_supply_by_decimals() {
        let meta = TokenMetadata::new("My Token", "MTK", 18, 10_000).unwrap();
        let expected = U256::from(10_000) * U256::from(10).pow(U256::from(18));

        assert_eq!(meta.name(), "My Token");
        assert_eq!(meta.symbol(), "MTK");
        assert_eq!(meta.decimal(), 18);
        assert_eq!(meta.total_supply(), expected);
    }

    #[test]
    fn zero_decimals_leaves_supply_unscaled() {
        let meta = TokenMetadata::new("Flat", "FLT", 0, 500).unwrap();
        assert_eq!(meta.total_supply(), U256::from(500));
    }

    #[test]
    fn zero_initial_supply_is_valid() {
        let meta = TokenMetadata::new("Empty", "EMP", 18, 0).unwrap();
        assert_eq!(meta.total_supply(), U256::ZERO);
    }

    #[test]
    fn oversized_supply_rejected() {
        // 10^77 still fits in 256 bits, but 2 * 10^77 does not.
        let result = TokenMetadata::new("Huge", "HUG", 77, 2);
        assert!(matches!(
            result,
            Err(LedgerError::ConstructionOverflow {
                whole: 2,
                decimals: 77
            })
        ));
    }

    #[test]
    fn oversized_scale_rejected() {
        // 10^decimals itself overflows long before u8::MAX.
        let result = TokenMetadata::new("Huge", "HUG", u8::MAX, 1);
        assert!(matches!(
            result,
            Err(LedgerError::ConstructionOverflow { .. })
        ));
    }

    #[test]
    fn metadata_serialization_roundtrip() {
        let meta = TokenMetadata::new("My Token", "MTK", 18, 10_000).unwrap();
        let json = serde_json::to_string(&meta).expect("serialize");
        let recovered: TokenMetadata = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(meta, recovered);
    }
}

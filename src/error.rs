//! # Ledger Errors
//!
//! Every failure a ledger operation can produce. All variants are terminal
//! validation failures local to a single call: the ledger performs no
//! retries, and a failed call leaves balances and allowances exactly as
//! they were. Callers recover by re-invoking with corrected arguments.
//!
//! The display strings are part of the public interface. Downstream layers
//! match on them for revert reporting, so they must never change.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The recipient of a transfer is the reserved zero address.
    #[error("transfer to zero address!")]
    TransferToZeroAddress,

    /// The owner side of a delegated transfer is the reserved zero address.
    #[error("transfer from zero address!")]
    TransferFromZeroAddress,

    /// The sender's balance does not cover the requested amount.
    #[error("not enough token to transfer!")]
    InsufficientBalance {
        /// The sender's current balance.
        available: U256,
        /// The amount the sender tried to move.
        requested: U256,
    },

    /// The spender of an approval is the reserved zero address.
    #[error("approve to zero address")]
    ApproveToZeroAddress,

    /// The caller's allowance does not cover the requested delegated amount.
    #[error("not enough allowance!")]
    InsufficientAllowance {
        /// The account whose funds were being moved.
        owner: Address,
        /// The caller attempting the delegated transfer.
        spender: Address,
        /// The remaining allowance.
        allowed: U256,
        /// The amount the caller tried to move.
        requested: U256,
    },

    /// `initial_supply_whole * 10^decimals` does not fit in 256 bits.
    #[error("total supply overflow: {whole} whole units at {decimals} decimals")]
    ConstructionOverflow {
        /// The requested initial supply in whole units.
        whole: u64,
        /// The requested decimal precision.
        decimals: u8,
    },
}

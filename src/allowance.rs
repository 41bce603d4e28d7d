//! # Allowance Ledger
//!
//! Delegation state: how much each spender may still move out of each
//! owner's balance through the delegated-transfer path. Entries default to
//! zero and are only ever written by an explicit approval (absolute set)
//! or by the implicit debit of a delegated transfer.
//!
//! ## The unlimited sentinel
//!
//! An allowance equal to [`UNLIMITED_ALLOWANCE`] (`2^256 - 1`) is an
//! unbounded grant: delegated transfers never decrement it, no matter how
//! many run or how large they are. The sentinel is recognized by exact
//! equality -- `UNLIMITED_ALLOWANCE - 1` is an ordinary finite allowance
//! and behaves like one.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// An allowance equal to this value never decrements on delegated
/// transfers. Compared by equality only.
pub const UNLIMITED_ALLOWANCE: U256 = U256::MAX;

/// Owner -> spender -> remaining delegated amount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceLedger {
    /// Nested delegation map. Absent entries mean zero.
    allowances: HashMap<Address, HashMap<Address, U256>>,
}

impl AllowanceLedger {
    /// Creates an empty allowance ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how much `spender` may still move out of `owner`'s balance.
    /// Zero for any pair never approved. Never fails.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&owner)
            .and_then(|grants| grants.get(&spender))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Sets the allowance of `spender` over `owner`'s funds to `amount`.
    ///
    /// The set is absolute, not additive: a second approval replaces the
    /// first. Granting [`UNLIMITED_ALLOWANCE`] is the one and only way to
    /// delegate without bound.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ApproveToZeroAddress`] when `spender` is the
    /// zero address.
    pub(crate) fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if spender == Address::ZERO {
            return Err(LedgerError::ApproveToZeroAddress);
        }

        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);
        Ok(())
    }

    /// Validates a pending debit of `amount` against the allowance of
    /// `spender` over `owner`'s funds, without mutating anything.
    ///
    /// Returns the value to store on commit: `Some(remaining)` for a
    /// finite allowance, `None` when the allowance is the unlimited
    /// sentinel and must be left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`] when a finite
    /// allowance is smaller than `amount`.
    pub(crate) fn prepare_debit(
        &self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Option<U256>, LedgerError> {
        let allowed = self.allowance(owner, spender);
        if allowed == UNLIMITED_ALLOWANCE {
            return Ok(None);
        }
        if allowed < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner,
                spender,
                allowed,
                requested: amount,
            });
        }
        Ok(Some(allowed - amount))
    }

    /// Commits a debit previously validated by
    /// [`prepare_debit`](Self::prepare_debit). Infallible: all checking
    /// happened at prepare time.
    pub(crate) fn commit_debit(&mut self, owner: Address, spender: Address, remaining: U256) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, remaining);
    }
}

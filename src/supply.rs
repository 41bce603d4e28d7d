//! # Supply Ledger
//!
//! The balance half of the ledger state: a map from account address to
//! held amount, plus the atomic transfer primitive both the direct and
//! the delegated paths go through.
//!
//! Invariant: the sum of all balances equals the fixed total supply at
//! every point after construction. The transfer primitive preserves it by
//! construction -- every debit is paired with an equal credit, and all
//! validation happens before either side is touched.
//!
//! Accounts are created implicitly: any address never credited simply
//! reads as zero. The zero address is not an account at all; crediting it
//! is rejected explicitly rather than left to default-to-zero semantics.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Per-account balances for a single fixed-supply token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyLedger {
    /// Held amounts keyed by account. Absent means zero.
    balances: HashMap<Address, U256>,
}

impl SupplyLedger {
    /// Creates an empty supply ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the full supply into `account` at construction time.
    ///
    /// This is the only credit that is not paired with a debit; it runs
    /// exactly once, before any balance exists, so the supply invariant
    /// holds from the first observable state.
    pub(crate) fn seed(&mut self, account: Address, total_supply: U256) {
        self.balances.insert(account, total_supply);
    }

    /// Returns the balance of `account`, zero for any account never
    /// credited. Never fails.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    /// Moves `amount` from `from` to `to`. Both sides update or neither
    /// does.
    ///
    /// A zero-amount transfer from a funded, non-zero participant succeeds
    /// trivially.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransferToZeroAddress`] when `to` is the
    /// zero address, checked before any balance is read or written.
    /// Returns [`LedgerError::InsufficientBalance`] when `from` holds less
    /// than `amount`.
    pub(crate) fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if to == Address::ZERO {
            return Err(LedgerError::TransferToZeroAddress);
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        // Validation is complete; neither write below can fail. The credit
        // cannot overflow: no balance can exceed the total supply.
        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_insert(U256::ZERO) += amount;

        Ok(())
    }

    /// Returns all accounts with a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.balances
            .iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(account, amount)| (*account, *amount))
    }

    /// Returns the number of accounts holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.holders().count()
    }

    /// Sums every balance. Equals the total supply in every reachable
    /// state; exposed so embedders and tests can audit the invariant.
    pub fn circulating(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::ZERO, |sum, amount| sum + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn seeded(account: Address, amount: u64) -> SupplyLedger {
        let mut ledger = SupplyLedger::new();
        ledger.seed(account, U256::from(amount));
        ledger
    }

    #[test]
    fn unknown_account_reads_zero() {
        let ledger = SupplyLedger::new();
        assert_eq!(ledger.balance_of(addr(0x01)), U256::ZERO);
    }

    #[test]
    fn transfer_moves_funds() {
        let mut ledger = seeded(addr(0x01), 1_000);
        ledger
            .transfer(addr(0x01), addr(0x02), U256::from(400))
            .unwrap();

        assert_eq!(ledger.balance_of(addr(0x01)), U256::from(600));
        assert_eq!(ledger.balance_of(addr(0x02)), U256::from(400));
    }

    #[test]
    fn transfer_to_zero_address_rejected() {
        let mut ledger = seeded(addr(0x01), 1_000);
        let result = ledger.transfer(addr(0x01), Address::ZERO, U256::from(1));

        assert_eq!(result, Err(LedgerError::TransferToZeroAddress));
        assert_eq!(ledger.balance_of(addr(0x01)), U256::from(1_000));
    }

    #[test]
    fn transfer_exceeding_balance_rejected() {
        let mut ledger = seeded(addr(0x01), 100);
        let result = ledger.transfer(addr(0x01), addr(0x02), U256::from(101));

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(ledger.balance_of(addr(0x01)), U256::from(100));
        assert_eq!(ledger.balance_of(addr(0x02)), U256::ZERO);
    }

    #[test]
    fn transfer_of_full_balance_succeeds() {
        let mut ledger = seeded(addr(0x01), 100);
        ledger
            .transfer(addr(0x01), addr(0x02), U256::from(100))
            .unwrap();

        assert_eq!(ledger.balance_of(addr(0x01)), U256::ZERO);
        assert_eq!(ledger.balance_of(addr(0x02)), U256::from(100));
    }

    #[test]
    fn zero_amount_transfer_succeeds() {
        let mut ledger = seeded(addr(0x01), 100);
        ledger.transfer(addr(0x01), addr(0x02), U256::ZERO).unwrap();

        assert_eq!(ledger.balance_of(addr(0x01)), U256::from(100));
        assert_eq!(ledger.balance_of(addr(0x02)), U256::ZERO);
    }

    #[test]
    fn self_transfer_is_a_no_op() {
        let mut ledger = seeded(addr(0x01), 100);
        ledger
            .transfer(addr(0x01), addr(0x01), U256::from(60))
            .unwrap();

        assert_eq!(ledger.balance_of(addr(0x01)), U256::from(100));
    }

    #[test]
    fn circulating_matches_seeded_supply() {
        let mut ledger = seeded(addr(0x01), 1_000);
        ledger
            .transfer(addr(0x01), addr(0x02), U256::from(250))
            .unwrap();
        ledger
            .transfer(addr(0x02), addr(0x03), U256::from(50))
            .unwrap();

        assert_eq!(ledger.circulating(), U256::from(1_000));
    }

    #[test]
    fn holders_excludes_drained_accounts() {
        let mut ledger = seeded(addr(0x01), 100);
        ledger
            .transfer(addr(0x01), addr(0x02), U256::from(100))
            .unwrap();

        assert_eq!(ledger.holder_count(), 1);
        let holders: Vec<_> = ledger.holders().collect();
        assert_eq!(holders, vec![(addr(0x02), U256::from(100))]);
    }
}

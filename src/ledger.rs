//! # Token Ledger
//!
//! The public face of the crate: one handle owning the metadata, the
//! balance map, the allowance map, and the event sink, with the five
//! operations that are allowed to touch them. Nothing else writes ledger
//! state.
//!
//! Every operation is a single synchronous unit of work: validate fully,
//! then mutate, then emit. A failed validation returns before the first
//! write, so a reverted call is indistinguishable from one that never
//! happened -- no partial balance or allowance update is ever observable.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::allowance::AllowanceLedger;
use crate::error::LedgerError;
use crate::event::{Event, EventSink, NullSink};
use crate::metadata::TokenMetadata;
use crate::supply::SupplyLedger;

/// A fixed-supply fungible-token ledger.
///
/// Constructed once via [`deploy`](Self::deploy) (or
/// [`deploy_with_sink`](TokenLedger::deploy_with_sink) to attach an event
/// collaborator), which credits the entire scaled supply to the deploying
/// address. After that, state changes only through [`transfer`], [`approve`]
/// and [`transfer_from`].
///
/// [`transfer`]: Self::transfer
/// [`approve`]: Self::approve
/// [`transfer_from`]: Self::transfer_from
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = "S: Default"))]
pub struct TokenLedger<S: EventSink = NullSink> {
    /// Fixed descriptive fields.
    metadata: TokenMetadata,
    /// Per-account balances.
    supply: SupplyLedger,
    /// Per-(owner, spender) delegations.
    allowances: AllowanceLedger,
    /// Event collaborator. Not part of ledger state; a deserialized ledger
    /// starts with a fresh default sink.
    #[serde(skip)]
    sink: S,
}

impl TokenLedger<NullSink> {
    /// Deploys a ledger that discards its events.
    ///
    /// `initial_supply_whole` is scaled by `10^decimals` and credited in
    /// full to `deployer`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ConstructionOverflow`] if the scaled supply
    /// does not fit in 256 bits.
    pub fn deploy(
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply_whole: u64,
        deployer: Address,
    ) -> Result<Self, LedgerError> {
        Self::deploy_with_sink(
            name,
            symbol,
            decimals,
            initial_supply_whole,
            deployer,
            NullSink,
        )
    }
}

impl<S: EventSink> TokenLedger<S> {
    /// Deploys a ledger wired to the given event sink.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ConstructionOverflow`] if the scaled supply
    /// does not fit in 256 bits.
    pub fn deploy_with_sink(
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply_whole: u64,
        deployer: Address,
        sink: S,
    ) -> Result<Self, LedgerError> {
        let metadata = TokenMetadata::new(name, symbol, decimals, initial_supply_whole)?;
        let mut supply = SupplyLedger::new();
        supply.seed(deployer, metadata.total_supply());

        debug!(
            name = metadata.name(),
            symbol = metadata.symbol(),
            total_supply = %metadata.total_supply(),
            %deployer,
            "ledger deployed"
        );

        Ok(Self {
            metadata,
            supply,
            allowances: AllowanceLedger::new(),
            sink,
        })
    }

    // -- Read accessors (pure, never fail) ----------------------------------

    /// The token name.
    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    /// The ticker symbol.
    pub fn symbol(&self) -> &str {
        self.metadata.symbol()
    }

    /// The decimal precision.
    pub fn decimal(&self) -> u8 {
        self.metadata.decimal()
    }

    /// The total supply in smallest units.
    pub fn total_supply(&self) -> U256 {
        self.metadata.total_supply()
    }

    /// The full metadata record.
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// The balance of `account`, zero if never credited.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.supply.balance_of(account)
    }

    /// How much `spender` may still move out of `owner`'s balance, zero if
    /// never approved.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.allowance(owner, spender)
    }

    /// The balance map, for auditing and display.
    pub fn supply_ledger(&self) -> &SupplyLedger {
        &self.supply
    }

    /// The attached event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the attached event sink (e.g., to drain a
    /// recording sink).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // -- Mutating operations ------------------------------------------------

    /// Moves `amount` of the caller's own funds to `to`.
    ///
    /// Emits `Transfer(caller, to, amount)` on success, including for a
    /// zero amount.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransferToZeroAddress`] or
    /// [`LedgerError::InsufficientBalance`]; either way no state changed
    /// and nothing was emitted.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if let Err(err) = self.supply.transfer(caller, to, amount) {
            warn!(from = %caller, %to, %amount, %err, "transfer reverted");
            return Err(err);
        }

        debug!(from = %caller, %to, %amount, "transfer committed");
        self.sink.emit(Event::Transfer {
            from: caller,
            to,
            value: amount,
        });
        Ok(())
    }

    /// Sets the caller's allowance for `spender` to `amount`, replacing
    /// any previous value.
    ///
    /// Emits `Approval(caller, spender, amount)` on success. Approving
    /// [`UNLIMITED_ALLOWANCE`](crate::allowance::UNLIMITED_ALLOWANCE)
    /// grants delegation that delegated transfers never decrement.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ApproveToZeroAddress`]; no state changed and
    /// nothing was emitted.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if let Err(err) = self.allowances.approve(caller, spender, amount) {
            warn!(owner = %caller, %spender, %amount, %err, "approve reverted");
            return Err(err);
        }

        debug!(owner = %caller, %spender, %amount, "approval committed");
        self.sink.emit(Event::Approval {
            owner: caller,
            spender,
            value: amount,
        });
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on the strength of the caller's
    /// allowance.
    ///
    /// Validation order is fixed: zero-address checks on `from` and `to`
    /// first, then the allowance check, then the balance check inside the
    /// transfer primitive. An allowance shortfall is therefore reported
    /// even when the balance would also have been short.
    ///
    /// A finite allowance is debited by `amount` with no `Approval`
    /// emitted for the debit; an unlimited allowance is left untouched.
    /// Exactly one `Transfer(from, to, amount)` is emitted on success.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransferFromZeroAddress`],
    /// [`LedgerError::TransferToZeroAddress`],
    /// [`LedgerError::InsufficientAllowance`] or
    /// [`LedgerError::InsufficientBalance`]; in every case no balance or
    /// allowance changed and nothing was emitted.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let outcome = self.try_transfer_from(caller, from, to, amount);
        match &outcome {
            Ok(()) => {
                debug!(spender = %caller, %from, %to, %amount, "delegated transfer committed");
                self.sink.emit(Event::Transfer {
                    from,
                    to,
                    value: amount,
                });
            }
            Err(err) => {
                warn!(spender = %caller, %from, %to, %amount, %err, "delegated transfer reverted");
            }
        }
        outcome
    }

    /// Validation and mutation of a delegated transfer, minus logging and
    /// event emission.
    fn try_transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if from == Address::ZERO {
            return Err(LedgerError::TransferFromZeroAddress);
        }
        if to == Address::ZERO {
            return Err(LedgerError::TransferToZeroAddress);
        }

        // `None` means the unlimited sentinel: nothing to write back.
        let debit = self.allowances.prepare_debit(from, caller, amount)?;

        // Last fallible step. Once it returns Ok the balance move has
        // committed and the allowance write below cannot fail, so the call
        // as a whole is all-or-nothing.
        self.supply.transfer(from, to, amount)?;

        if let Some(remaining) = debit {
            self.allowances.commit_debit(from, caller, remaining);
        }
        Ok(())
    }
}

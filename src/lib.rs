// Copyright (c) 2026 Token Ledger Developers. MIT License.
// See LICENSE for details.

//! # Token Ledger — Core Library
//!
//! A bookkeeping core for a fixed-supply, divisible, fungible token. It
//! tracks who owns what across a set of accounts, and lets one account
//! authorize another to move funds on its behalf (allowances). That's the
//! whole job -- no networking, no persistence, no consensus. Those are
//! other layers' problems.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! ledger:
//!
//! - **metadata** — Name, symbol, decimals, total supply. Fixed at deploy.
//! - **supply** — The balance map and the atomic transfer primitive.
//! - **allowance** — Delegation state, including the unlimited sentinel.
//! - **ledger** — The public facade wiring it all together.
//! - **event** — `Transfer`/`Approval` announcements and the sink seam.
//! - **error** — The closed failure taxonomy with interface-exact messages.
//!
//! ## Design Philosophy
//!
//! 1. Validate fully, then mutate. A reverted call leaves no trace.
//! 2. The sum of all balances equals the total supply, always.
//! 3. All arithmetic is exact 256-bit integer arithmetic.
//! 4. If it touches money, it has tests. Plural.
//!
//! ## Example
//!
//! ```
//! use token_ledger::{Address, TokenLedger, U256};
//!
//! let alice = Address::repeat_byte(0x01);
//! let bob = Address::repeat_byte(0x02);
//!
//! let mut ledger = TokenLedger::deploy("My Token", "MTK", 18, 10_000, alice)?;
//! ledger.transfer(alice, bob, U256::from(100))?;
//!
//! assert_eq!(ledger.balance_of(bob), U256::from(100));
//! # Ok::<(), token_ledger::LedgerError>(())
//! ```

pub mod allowance;
pub mod error;
pub mod event;
pub mod ledger;
pub mod metadata;
pub mod supply;

pub use allowance::{AllowanceLedger, UNLIMITED_ALLOWANCE};
pub use error::LedgerError;
pub use event::{Event, EventSink, MemorySink, NullSink};
pub use ledger::TokenLedger;
pub use metadata::TokenMetadata;
pub use supply::SupplyLedger;

// Account and amount types, re-exported so embedders don't need a direct
// alloy-primitives dependency.
pub use alloy_primitives::{Address, U256};

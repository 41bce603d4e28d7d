//! # Ledger Events
//!
//! Every successful mutating operation announces what it did as an
//! [`Event`], delivered to an [`EventSink`] supplied at construction time.
//! The ledger emits; it does not persist or deliver. Whatever the embedder
//! does with events -- index them, forward them over the wire, drop them --
//! is outside the ledger's concern.
//!
//! Two sinks ship with the crate: [`NullSink`] discards everything (the
//! default), and [`MemorySink`] records events in order so tests and
//! embedders can assert exactly what a call emitted.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A state-change announcement from the ledger.
///
/// Field order matches the wire-level event layout: `Transfer(from, to,
/// value)` and `Approval(owner, spender, value)`. Values are exact at
/// commit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Funds moved from `from` to `to`. Emitted by both the direct and the
    /// delegated transfer paths. A zero-value transfer still emits.
    Transfer {
        /// The debited account.
        from: Address,
        /// The credited account.
        to: Address,
        /// The amount moved.
        value: U256,
    },

    /// `owner` granted `spender` the right to move `value` of its funds.
    /// Emitted only by an explicit approval -- the implicit allowance debit
    /// during a delegated transfer does not re-announce.
    Approval {
        /// The granting account.
        owner: Address,
        /// The authorized account.
        spender: Address,
        /// The new absolute allowance.
        value: U256,
    },
}

/// Receives events from the ledger as they are committed.
pub trait EventSink {
    /// Called once per emitted event, in commit order.
    fn emit(&mut self, event: Event);
}

/// A sink that discards every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}

/// A sink that records every event in commit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    events: Vec<Event>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The most recently recorded event, if any.
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event::Transfer {
            from: Address::repeat_byte(0x01),
            to: Address::repeat_byte(0x02),
            value: U256::from(42),
        }
    }

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.emit(sample());
        sink.emit(Event::Approval {
            owner: Address::repeat_byte(0x01),
            spender: Address::repeat_byte(0x03),
            value: U256::from(7),
        });

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0], sample());
        assert!(matches!(sink.last(), Some(Event::Approval { .. })));
    }

    #[test]
    fn drain_empties_the_sink() {
        let mut sink = MemorySink::new();
        sink.emit(sample());

        let drained = sink.drain();
        assert_eq!(drained.len(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = sample();
        let json = serde_json::to_string(&event).expect("serialize");
        let recovered: Event = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event, recovered);
    }
}

//! Monotonic tickets for "latest wins" async work.
//!
//! Every start of a request (or of a debounce window) takes a ticket; when
//! the work completes it checks whether its ticket is still the latest and
//! drops its result otherwise.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Sequence {
    latest: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new unit of work, superseding all earlier tickets
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// `Sequence` stored in the reactive arena so it can be shared by `Copy`
/// closures of a component.
#[derive(Clone, Copy)]
pub struct SharedSequence(StoredValue<Sequence>);

impl SharedSequence {
    pub fn new() -> Self {
        Self(StoredValue::new(Sequence::new()))
    }

    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket(0);
        self.0.update_value(|seq| ticket = seq.begin());
        ticket
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.0.with_value(|seq| seq.is_latest(ticket))
    }
}

impl Default for SharedSequence {
    fn default() -> Self {
        Self::new()
    }
}

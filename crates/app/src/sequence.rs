//! Request tickets: discard responses that arrive out of order.
//!
//! Poll ticks fire whether or not the previous request has resolved, and a
//! new camera selection can happen while requests for the old one are in
//! flight. Every request takes a [`Ticket`] when it is issued; its response
//! is rendered only when [`RequestSequence::accept`] says so.

use std::cell::Cell;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    seq: u64,
}

/// Ticket issuer for one kind of request (status, detections, …).
#[derive(Debug, Default)]
pub struct RequestSequence {
    generation: Cell<u64>,
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every ticket issued so far (selection changed).
    pub fn advance(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    /// Issue a ticket for a request about to be sent.
    pub fn issue(&self) -> Ticket {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        Ticket {
            generation: self.generation.get(),
            seq,
        }
    }

    /// Whether the response for `ticket` should be rendered.
    ///
    /// Accepts only tickets from the current generation that are newer than
    /// the last accepted one, and records the acceptance.
    pub fn accept(&self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation.get() || ticket.seq <= self.rendered.get() {
            return false;
        }
        self.rendered.set(ticket.seq);
        true
    }
}

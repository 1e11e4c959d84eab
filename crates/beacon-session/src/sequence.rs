//! Request sequencing for out-of-order responses.
//!
//! Every initiated request takes a [`Ticket`]. When its response arrives the
//! owner asks the sequencer whether the effect may still be applied.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Monotonic sequence number handed out when a request is initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// What happened to a response that arrived successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The response was applied to session state.
    Applied,
    /// A newer request won; the response was discarded.
    Superseded,
    /// The request was never made (e.g. blank search query).
    Skipped,
}

/// Issues tickets and tracks the latest issued and latest applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    accepted: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
        }
    }

    /// Take the next ticket. Tickets start at 1.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when no ticket newer than `ticket` has been issued.
    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Record `ticket` as applied if it is newer than everything applied so far.
    ///
    /// Returns `false` (and records nothing) for a stale ticket.
    pub fn accept(&self, ticket: Ticket) -> bool {
        self.accepted.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }

    /// True when a newer ticket than `ticket` has already been applied.
    #[must_use]
    pub fn is_superseded(&self, ticket: Ticket) -> bool {
        self.accepted.load(Ordering::SeqCst) > ticket.0
    }
}

// catalog/controller/debounce.rs - Debounced propagation of the search input
//
// Every pushed value bumps a generation counter and hands back a ticket.
// The host schedules one timer per ticket; when a timer elapses it calls
// `fire` with its ticket, and only the ticket of the newest value emits.
// A newer push or `cancel` invalidates every outstanding ticket, which is
// how a pending timer is "cleared" without needing a timer handle.

use std::time::Duration;

/// Handle of one scheduled quiescence timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    /// How long the host should wait before firing a ticket
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a new value and restart the quiescence window
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// The timer for `ticket` elapsed
    ///
    /// Returns the pending value only when no newer value arrived since the
    /// ticket was handed out. At most one emission happens per burst.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//! Request identity and view liveness
//!
//! Every state machine in this crate hands out a [`Ticket`] when a request
//! is issued and only accepts a resolution carrying the latest one. Views
//! additionally hold a [`ViewScope`] that is closed on unmount so late
//! responses never touch a view that is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identity of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic ticket source; the last-issued ticket is the only current one.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
    detached: bool,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn next(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Supersede all outstanding tickets without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.detached && ticket.0 == self.latest
    }

    /// Reject every ticket from now on.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

/// Liveness flag of a mounted view
#[derive(Debug, Clone)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(first < second);
    }

    #[test]
    fn test_invalidate_supersedes_outstanding() {
        let mut seq = RequestSeq::new();
        let ticket = seq.next();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_detach_rejects_everything() {
        let mut seq = RequestSeq::new();
        let ticket = seq.next();
        seq.detach();
        assert!(!seq.is_current(ticket));
        let later = seq.next();
        assert!(!seq.is_current(later));
    }

    #[test]
    fn test_scope_clones_share_liveness() {
        let scope = ViewScope::new();
        let task_copy = scope.clone();
        assert!(task_copy.is_alive());
        scope.close();
        assert!(!task_copy.is_alive());
    }
}

//! Session probe bookkeeping shared by every page

use crate::error::ApiError;
use crate::scope::{RequestSeq, Ticket};
use crate::types::SessionStatus;

/// Last known identity plus the ticket of the latest probe
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    status: SessionStatus,
    seq: RequestSeq,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn begin_probe(&mut self) -> Ticket {
        self.seq.next()
    }

    /// Apply a probe result. Any failure means "not signed in".
    pub fn probe_resolved(&mut self, ticket: Ticket, result: Result<SessionStatus, ApiError>) -> bool {
        if !self.seq.is_current(ticket) {
            return false;
        }
        self.status = match result {
            Ok(status) => status.normalized(),
            Err(e) => {
                tracing::warn!("Error checking auth status: {}", e);
                SessionStatus::anonymous()
            }
        };
        true
    }

    /// Local reset after a successful logout. Outstanding probes are stale.
    pub fn logged_out(&mut self) {
        self.seq.invalidate();
        self.status = SessionStatus::anonymous();
    }

    /// Apply the backend's answer to a logout request.
    ///
    /// Only a confirmed logout resets local state; on failure the current
    /// identity stays as it is. Returns whether the user is now signed out.
    pub fn logout_resolved(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.logged_out();
                true
            }
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
                false
            }
        }
    }
}

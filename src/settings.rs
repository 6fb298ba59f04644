//! Settings sync state machine
//!
//! Holds the editable shadow copy of the server-side settings record and
//! the phase of the fetch/save cycle around it.

use crate::error::ApiError;
use crate::scope::{RequestSeq, Ticket};
use crate::types::{Settings, SettingsField};

pub const LOAD_FAILED_MESSAGE: &str = "Error loading settings.";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving settings.";
pub const SAVE_SUCCEEDED_MESSAGE: &str = "Settings saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsPhase {
    Loading,
    LoadFailed(String),
    Ready,
    SavePending,
    SaveFailed(String),
    SaveSucceeded,
    Unauthorized,
}

/// What the view has to do after a response was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Stay,
    GoToLogin,
}

impl FollowUp {
    /// Route the view must navigate to, if any.
    pub fn route(self) -> Option<&'static str> {
        match self {
            FollowUp::Stay => None,
            FollowUp::GoToLogin => Some("/login"),
        }
    }
}

/// Tone of the status line under the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct SettingsMachine {
    phase: SettingsPhase,
    shadow: Settings,
    fetch_seq: RequestSeq,
    save_seq: RequestSeq,
}

impl SettingsMachine {
    pub fn new() -> Self {
        Self {
            phase: SettingsPhase::Loading,
            shadow: Settings::default(),
            fetch_seq: RequestSeq::new(),
            save_seq: RequestSeq::new(),
        }
    }

    pub fn phase(&self) -> &SettingsPhase {
        &self.phase
    }

    /// Current shadow copy.
    pub fn record(&self) -> Settings {
        self.shadow
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.phase = SettingsPhase::Loading;
        self.fetch_seq.next()
    }

    pub fn fetch_resolved(&mut self, ticket: Ticket, result: Result<Settings, ApiError>) -> FollowUp {
        if !self.fetch_seq.is_current(ticket) {
            tracing::warn!("Ignoring stale settings fetch");
            return FollowUp::Stay;
        }
        match result {
            Ok(record) => {
                self.shadow = record;
                self.phase = SettingsPhase::Ready;
                FollowUp::Stay
            }
            Err(e) => self.fail(e, LOAD_FAILED_MESSAGE, SettingsPhase::LoadFailed),
        }
    }

    /// Edit one field of the shadow copy.
    pub fn set_field(&mut self, field: SettingsField, value: bool) {
        if self.phase == SettingsPhase::Unauthorized {
            return;
        }
        self.shadow.set(field, value);
    }

    /// Start saving the full shadow copy. Returns the body to submit.
    ///
    /// A fetch still in flight is superseded: the submitted copy is newer
    /// than whatever it would bring back.
    pub fn begin_save(&mut self) -> Option<(Ticket, Settings)> {
        if self.phase == SettingsPhase::Unauthorized {
            return None;
        }
        self.fetch_seq.invalidate();
        self.phase = SettingsPhase::SavePending;
        Some((self.save_seq.next(), self.shadow))
    }

    pub fn save_resolved(&mut self, ticket: Ticket, result: Result<(), ApiError>) -> FollowUp {
        if !self.save_seq.is_current(ticket) {
            tracing::warn!("Ignoring stale settings save");
            return FollowUp::Stay;
        }
        match result {
            Ok(()) => {
                self.phase = SettingsPhase::SaveSucceeded;
                FollowUp::Stay
            }
            Err(e) => self.fail(e, SAVE_FAILED_MESSAGE, SettingsPhase::SaveFailed),
        }
    }

    fn fail(
        &mut self,
        error: ApiError,
        message: &str,
        phase: impl FnOnce(String) -> SettingsPhase,
    ) -> FollowUp {
        if error.is_unauthorized() {
            self.phase = SettingsPhase::Unauthorized;
            return FollowUp::GoToLogin;
        }
        tracing::error!("Settings request failed: {}", error);
        self.phase = phase(message.to_string());
        FollowUp::Stay
    }

    /// Status line for the current phase, if any.
    pub fn message(&self) -> Option<(MessageKind, &str)> {
        match &self.phase {
            SettingsPhase::LoadFailed(m) | SettingsPhase::SaveFailed(m) => {
                Some((MessageKind::Error, m.as_str()))
            }
            SettingsPhase::SaveSucceeded => Some((MessageKind::Success, SAVE_SUCCEEDED_MESSAGE)),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.phase == SettingsPhase::SavePending
    }

    /// Mark the owning view as unmounted.
    pub fn detach(&mut self) {
        self.fetch_seq.detach();
        self.save_seq.detach();
    }
}

impl Default for SettingsMachine {
    fn default() -> Self {
        Self::new()
    }
}

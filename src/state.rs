//! Global application state

use leptos::prelude::*;

use crate::api::probe_session;
use crate::config::AppConfig;
use crate::scope::ViewScope;
use crate::session::SessionStore;
use crate::types::SessionStatus;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Backend origin and client behaviour
    pub config: AppConfig,
    /// Identity as last reported by the backend
    pub session: RwSignal<SessionStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            session: RwSignal::new(SessionStore::new()),
        }
    }

    /// Reactive view of the current identity.
    pub fn session_status(&self) -> Signal<SessionStatus> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.status().clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-verify the session once for the calling view.
///
/// This is the single place pages subscribe to identity; it probes on
/// mount and hands back the shared status signal.
pub fn use_session_probe() -> Signal<SessionStatus> {
    let state = expect_context::<AppState>();
    probe_session(state.clone());
    state.session_status()
}

/// Liveness scope closed when the calling view is torn down.
pub fn use_view_scope() -> ViewScope {
    let scope = ViewScope::new();
    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.close());
    scope
}

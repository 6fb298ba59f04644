//! API types matching the gosearch backend

use serde::{Deserialize, Serialize};

/// Identity reported by the "who am I" endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub username: String,
}

impl SessionStatus {
    /// The state shown whenever identity cannot be confirmed.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            username: username.into(),
        }
    }

    /// Drop the username when the backend reports no session.
    pub fn normalized(self) -> Self {
        if self.is_authenticated {
            self
        } else {
            Self::anonymous()
        }
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Per-user settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
    pub safe_search: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            safe_search: false,
        }
    }
}

/// Field of [`Settings`] addressed by a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    DarkMode,
    SafeSearch,
}

impl Settings {
    pub fn get(&self, field: SettingsField) -> bool {
        match field {
            SettingsField::DarkMode => self.dark_mode,
            SettingsField::SafeSearch => self.safe_search,
        }
    }

    pub fn set(&mut self, field: SettingsField, value: bool) {
        match field {
            SettingsField::DarkMode => self.dark_mode = value,
            SettingsField::SafeSearch => self.safe_search = value,
        }
    }
}

/// Login and register request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Register response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

/// Login response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Read the body of a 2xx login response.
    ///
    /// The status alone means the session was created; the body only
    /// contributes an optional `message`, and any other shape is ignored.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string));
        Self { message }
    }
}

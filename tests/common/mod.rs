//! In-memory stand-in for the gosearch backend.
//!
//! Responses are produced the same way the HTTP layer produces them: a
//! status code plus a raw body, classified through `ApiError::from_status`
//! and decoded with the crate's own decoding functions.

#![allow(dead_code)]

use gosearch_web::api::normalize_search_payload;
use gosearch_web::error::ApiError;
use gosearch_web::types::{SearchResult, SessionStatus, Settings};

/// A backend that keeps one user's session and settings consistent
/// across requests.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    user: Option<String>,
    settings: Settings,
    available: bool,
}

impl FakeBackend {
    pub fn signed_in(username: &str, settings: Settings) -> Self {
        Self {
            user: Some(username.to_string()),
            settings,
            available: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            settings: Settings::default(),
            available: true,
        }
    }

    /// Every request fails before a response arrives.
    pub fn unreachable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn expire_session(&mut self) {
        self.user = None;
    }

    fn respond(&self, status: u16, body: &str) -> Result<String, ApiError> {
        if !self.available {
            return Err(ApiError::Network("Failed to fetch".into()));
        }
        if (200..300).contains(&status) {
            Ok(body.to_string())
        } else {
            Err(ApiError::from_status(status, body))
        }
    }

    /// GET /api/user
    pub fn who_am_i(&self) -> Result<SessionStatus, ApiError> {
        let body = match &self.user {
            Some(name) => format!(r#"{{"is_authenticated":true,"username":"{}"}}"#, name),
            None => r#"{"is_authenticated":false,"username":""}"#.to_string(),
        };
        let body = self.respond(200, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST /api/logout
    pub fn logout(&mut self) -> Result<(), ApiError> {
        self.respond(200, r#"{"message":"Logged out"}"#)?;
        self.user = None;
        Ok(())
    }

    /// GET /api/settings
    pub fn get_settings(&self) -> Result<Settings, ApiError> {
        let body = match self.user {
            Some(_) => self.respond(200, &serde_json::to_string(&self.settings)?)?,
            None => self.respond(401, r#"{"error":"Unauthorized"}"#)?,
        };
        Ok(serde_json::from_str(&body)?)
    }

    /// POST /api/settings
    pub fn post_settings(&mut self, settings: &Settings) -> Result<(), ApiError> {
        match self.user {
            Some(_) => {
                self.respond(200, r#"{"message":"Settings updated"}"#)?;
                self.settings = *settings;
                Ok(())
            }
            None => self.respond(401, r#"{"error":"Unauthorized"}"#).map(|_| ()),
        }
    }
}

/// Outcome of GET /api/search for a canned status and body
pub fn search_response(status: u16, body: &str) -> Result<Vec<SearchResult>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    normalize_search_payload(body)
}

/// Outcome of a probe that got a canned status and body
pub fn probe_response(status: u16, body: &str) -> Result<SessionStatus, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

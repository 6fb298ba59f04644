//! Front-end configuration
//!
//! Values are baked in at build time from `GOSEARCH_*` environment
//! variables. The backend origin can additionally be overridden at runtime
//! through local storage, which is handy when pointing a deployed build at
//! a local backend.

use gloo_storage::{LocalStorage, Storage};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const STORAGE_KEY_API_BASE: &str = "gosearch_api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin every backend path is joined onto
    pub api_base: String,
    /// Route to open after a successful login; `None` keeps the form on screen
    pub login_redirect: Option<String>,
    /// Client-side request timeout; `None` waits indefinitely
    pub request_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Build a config from raw string values, ignoring blank or malformed ones.
    pub fn from_values(
        api_base: Option<&str>,
        login_redirect: Option<&str>,
        request_timeout_ms: Option<&str>,
    ) -> Self {
        let api_base = non_blank(api_base)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let login_redirect = non_blank(login_redirect).map(|route| {
            if route.starts_with('/') {
                route.to_string()
            } else {
                format!("/{}", route)
            }
        });

        let request_timeout_ms = non_blank(request_timeout_ms).and_then(|raw| match raw.parse::<u32>() {
            Ok(0) => None,
            Ok(ms) => Some(ms),
            Err(e) => {
                tracing::warn!("Ignoring invalid request timeout {:?}: {}", raw, e);
                None
            }
        });

        Self {
            api_base,
            login_redirect,
            request_timeout_ms,
        }
    }

    /// Config baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GOSEARCH_API_BASE"),
            option_env!("GOSEARCH_LOGIN_REDIRECT"),
            option_env!("GOSEARCH_REQUEST_TIMEOUT_MS"),
        )
    }

    /// Build-time config with the runtime backend override applied.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Ok(base) = LocalStorage::get::<String>(STORAGE_KEY_API_BASE) {
            config = config.with_api_base(&base);
        }
        tracing::info!("Using backend at {}", config.api_base);
        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        if let Some(base) = non_blank(Some(base)) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Full URL of a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

//! API client for communicating with the gosearch backend

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::*;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::RequestCredentials;

/// Attach the session cookie to a request
fn with_session(req: RequestBuilder) -> RequestBuilder {
    req.credentials(RequestCredentials::Include)
}

/// Send a request, applying the configured timeout if there is one
async fn send(req: Request, config: &AppConfig) -> Result<Response> {
    let Some(ms) = config.request_timeout_ms else {
        return Ok(req.send().await?);
    };

    let request = Box::pin(req.send());
    let timeout = TimeoutFuture::new(ms);
    match select(request, timeout).await {
        Either::Left((resp, _)) => Ok(resp?),
        Either::Right(_) => Err(ApiError::Timeout(ms)),
    }
}

/// Read the body of a response, turning non-2xx statuses into errors
async fn read_ok(resp: Response) -> Result<String> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_status(status, &body));
    }
    Ok(body)
}

/// Decode a JSON body; an empty body decodes to the default value
fn decode_body<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

/// GET a backend path with the session cookie attached
async fn get_text(config: &AppConfig, path: &str) -> Result<String> {
    let req = with_session(Request::get(&config.endpoint(path))).build()?;
    let resp = send(req, config).await?;
    read_ok(resp).await
}

/// POST a JSON body to a backend path with the session cookie attached
async fn post_json<T: serde::Serialize>(config: &AppConfig, path: &str, body: &T) -> Result<String> {
    let req = with_session(Request::post(&config.endpoint(path)))
        .header("Content-Type", "application/json")
        .json(body)?;
    let resp = send(req, config).await?;
    read_ok(resp).await
}

/// Turn a search response body into a result list.
///
/// The backend sometimes returns the list JSON-encoded inside a JSON
/// string; that string is decoded a second time. `null` means no results.
pub fn normalize_search_payload(body: &str) -> Result<Vec<SearchResult>> {
    let value: Value = serde_json::from_str(body)?;
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner).map_err(|e| {
            ApiError::Decode(format!("Failed to parse search response as JSON: {}", e))
        })?,
        other => other,
    };

    match value {
        Value::Null => Ok(vec![]),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(ApiError::Decode(format!(
            "expected a list of results, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Ask the backend who the current user is
pub async fn fetch_session(config: &AppConfig) -> Result<SessionStatus> {
    let body = get_text(config, "/api/user").await?;
    Ok(serde_json::from_str(&body)?)
}

/// End the current session
pub async fn logout(config: &AppConfig) -> Result<()> {
    let req = with_session(Request::post(&config.endpoint("/api/logout"))).build()?;
    let resp = send(req, config).await?;
    read_ok(resp).await.map(|_| ())
}

/// Register a new user
pub async fn register(config: &AppConfig, credentials: &Credentials) -> Result<RegisterResponse> {
    let body = post_json(config, "/api/register", credentials).await?;
    decode_body(&body)
}

/// Start a session
pub async fn login(config: &AppConfig, credentials: &Credentials) -> Result<LoginResponse> {
    let body = post_json(config, "/api/login", credentials).await?;
    Ok(LoginResponse::from_body(&body))
}

/// Run a search
pub async fn search(config: &AppConfig, query: &str) -> Result<Vec<SearchResult>> {
    let req = Request::get(&config.endpoint("/api/search"))
        .query([("q", query)])
        .build()?;
    let resp = send(req, config).await?;
    let body = read_ok(resp).await?;
    normalize_search_payload(&body)
}

/// Fetch the signed-in user's settings
pub async fn fetch_settings(config: &AppConfig) -> Result<Settings> {
    let body = get_text(config, "/api/settings").await?;
    Ok(serde_json::from_str(&body)?)
}

/// Persist settings
pub async fn save_settings(config: &AppConfig, settings: &Settings) -> Result<()> {
    post_json(config, "/api/settings", settings).await.map(|_| ())
}

/// Re-verify the session and publish the result into app state
pub fn probe_session(state: AppState) {
    let Some(ticket) = state.session.try_update(|s| s.begin_probe()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch_session(&state.config).await;
        let applied = state
            .session
            .try_update(|s| s.probe_resolved(ticket, result))
            .unwrap_or(false);
        if !applied {
            tracing::debug!("Discarded superseded session probe");
        }
    });
}

/// Log out, then run `on_done` if the backend confirmed it
pub fn sign_out(state: AppState, on_done: impl FnOnce() + 'static) {
    spawn_local(async move {
        let result = logout(&state.config).await;
        let signed_out = state
            .session
            .try_update(|s| s.logout_resolved(result))
            .unwrap_or(false);
        if signed_out {
            on_done();
        }
    });
}

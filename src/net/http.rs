//! HTTP gateway for the backend API.
//!
//! Every request flows through [`Gateway`]: it reads the bearer token from
//! the current session snapshot at dispatch time, decodes the response
//! envelope, and applies the client's one global policy. A 401 that
//! rejects the session's token clears the session and sends the user back
//! to the login page. Every other failure is returned to the caller, which
//! decides what to show.
//!
//! Browser transport (`gloo-net`) is gated behind the `csr` feature;
//! the native fallback fails with a network error so the decision logic
//! stays testable off the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::Envelope;
use crate::state::session::{Session, SessionState};

/// Errors surfaced by gateway calls.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. Carries the
    /// `detail` message extracted from the error body.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// A body could not be encoded or a response could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A 401 rejected the stored token. The gateway has already cleared
    /// the session and is navigating to the login page.
    #[error("session expired")]
    SessionExpired,
}

impl ApiError {
    /// True when the gateway already handled this failure globally and the
    /// app is navigating away; pages should render nothing for it.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Response as seen before envelope decoding.
struct Raw {
    status: u16,
    ok: bool,
    body: String,
}

/// The single chokepoint between pages and the backend.
///
/// Holds the injected session signal; cheap to copy into closures and
/// resources.
#[derive(Clone, Copy)]
pub struct Gateway {
    session: RwSignal<SessionState>,
}

impl Gateway {
    pub fn new(session: RwSignal<SessionState>) -> Self {
        Self { session }
    }

    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport, status, or decode problems.
    pub async fn get<T: DeserializeOwned>(self, path: &str) -> Result<Envelope<T>, ApiError> {
        let raw = self.dispatch(Method::Get, path, None).await?;
        self.decode(&raw)
    }

    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport, status, or decode problems.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let raw = self.dispatch(Method::Post, path, Some(json)).await?;
        self.decode(&raw)
    }

    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport, status, or decode problems.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let raw = self.dispatch(Method::Put, path, Some(json)).await?;
        self.decode(&raw)
    }

    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport, status, or decode problems.
    pub async fn delete<T: DeserializeOwned>(self, path: &str) -> Result<Envelope<T>, ApiError> {
        let raw = self.dispatch(Method::Delete, path, None).await?;
        self.decode(&raw)
    }

    /// Fetch a raw byte body (file downloads). The 401 policy applies the
    /// same as for envelope responses.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport or status problems.
    pub async fn get_bytes(self, path: &str) -> Result<Vec<u8>, ApiError> {
        let auth = self.fresh_header();
        fetch_bytes(path, auth.as_deref())
            .await?
            .map_err(|raw| self.classify_failure(&raw))
    }

    /// Send a multipart form (file uploads).
    ///
    /// # Errors
    ///
    /// Fails with [`ApiError`] on transport, status, or decode problems.
    #[cfg(feature = "csr")]
    pub async fn post_form<T: DeserializeOwned>(
        self,
        path: &str,
        form: &web_sys::FormData,
    ) -> Result<Envelope<T>, ApiError> {
        let auth = self.fresh_header();
        let raw = send_form(path, auth.as_deref(), form).await?;
        self.decode(&raw)
    }

    /// Authorization header computed from the session as it is right now.
    /// Never cached: a login or logout between two calls changes the next
    /// header, and only the next one.
    fn fresh_header(&self) -> Option<String> {
        authorization_header(&self.session.get_untracked().session)
    }

    async fn dispatch(
        self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Raw, ApiError> {
        let auth = self.fresh_header();
        transport(method, path, auth.as_deref(), body.as_ref()).await
    }

    fn decode<T: DeserializeOwned>(&self, raw: &Raw) -> Result<Envelope<T>, ApiError> {
        if raw.ok {
            return serde_json::from_str::<Envelope<T>>(&raw.body)
                .map_err(|e| ApiError::Decode(e.to_string()));
        }
        Err(self.classify_failure(raw))
    }

    /// Turn a non-success response into an error, tearing the session down
    /// when the backend rejected its token.
    fn classify_failure(&self, raw: &Raw) -> ApiError {
        let detail = extract_detail(&raw.body)
            .unwrap_or_else(|| format!("request failed with status {}", raw.status));
        let snapshot = self.session.get_untracked().session;
        if should_expire_session(&snapshot, raw.status, &detail, &current_path()) {
            leptos::logging::warn!("backend rejected the session token: {detail}");
            self.session.update(|state| state.session.logout());
            redirect_to_login();
            return ApiError::SessionExpired;
        }
        ApiError::Status {
            status: raw.status,
            detail,
        }
    }
}

// =============================================================
// Pure decision helpers
// =============================================================

/// Bearer header value for a session snapshot, if it holds a token.
pub fn authorization_header(session: &Session) -> Option<String> {
    session.token.as_ref().map(|t| format!("Bearer {t}"))
}

/// True when an error detail reads like a rejected or stale token.
///
/// The backend reports auth failures as prose, so this is a substring
/// match. The keyword list is part of the wire contract with the backend;
/// widen or replace it only together with the backend messages.
pub fn is_token_rejection(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    ["token", "expired", "invalid"]
        .iter()
        .any(|kw| lower.contains(kw))
}

/// Whether a failed response must clear the session and return to login.
///
/// Only a 401, for a session that is currently authenticated, outside the
/// login page, whose detail matches [`is_token_rejection`]. A login-page
/// 401 is an ordinary bad-credentials error and stays with the caller.
/// Because the first teardown flips `is_authenticated` off, later 401s
/// from in-flight requests no longer match and the redirect fires once.
pub fn should_expire_session(session: &Session, status: u16, detail: &str, path: &str) -> bool {
    status == 401
        && session.is_authenticated
        && !path.starts_with("/login")
        && is_token_rejection(detail)
}

/// Pull the `detail` message out of an error body, if it is an envelope.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(ToOwned::to_owned)
}

// =============================================================
// Browser transport (csr) and native fallbacks
// =============================================================

#[cfg(feature = "csr")]
async fn transport(
    method: Method,
    url: &str,
    auth: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<Raw, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    let builder = match auth {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    };
    let resp = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(Raw {
        status: resp.status(),
        ok: resp.ok(),
        body: resp.text().await.unwrap_or_default(),
    })
}

#[cfg(not(feature = "csr"))]
async fn transport(
    method: Method,
    url: &str,
    auth: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<Raw, ApiError> {
    let _ = (method, url, auth, body);
    Err(ApiError::Network("browser environment required".to_owned()))
}

/// Fetch bytes; `Err(Raw)` in the outer `Ok` means a non-success status.
#[cfg(feature = "csr")]
async fn fetch_bytes(url: &str, auth: Option<&str>) -> Result<Result<Vec<u8>, Raw>, ApiError> {
    use gloo_net::http::Request;

    let builder = match auth {
        Some(value) => Request::get(url).header("Authorization", value),
        None => Request::get(url),
    };
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        let bytes = resp
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        return Ok(Ok(bytes));
    }
    Ok(Err(Raw {
        status: resp.status(),
        ok: false,
        body: resp.text().await.unwrap_or_default(),
    }))
}

#[cfg(not(feature = "csr"))]
async fn fetch_bytes(url: &str, auth: Option<&str>) -> Result<Result<Vec<u8>, Raw>, ApiError> {
    let _ = (url, auth);
    Err(ApiError::Network("browser environment required".to_owned()))
}

#[cfg(feature = "csr")]
async fn send_form(url: &str, auth: Option<&str>, form: &web_sys::FormData) -> Result<Raw, ApiError> {
    use gloo_net::http::Request;

    let builder = match auth {
        Some(value) => Request::post(url).header("Authorization", value),
        None => Request::post(url),
    };
    let resp = builder
        .body(form.clone())
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(Raw {
        status: resp.status(),
        ok: resp.ok(),
        body: resp.text().await.unwrap_or_default(),
    })
}

#[cfg(feature = "csr")]
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[cfg(not(feature = "csr"))]
fn current_path() -> String {
    String::new()
}

/// Hard navigation, so a torn-down session starts from a clean page.
#[cfg(feature = "csr")]
fn redirect_to_login() {
    if let Some(w) = web_sys::window() {
        let _ = w.location().set_href("/login");
    }
}

#[cfg(not(feature = "csr"))]
fn redirect_to_login() {}

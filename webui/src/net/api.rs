//! HTTP access to the device, with uniform session-loss handling.
//!
//! Every request goes through the same status check: a 401 from any
//! endpoint, regardless of payload, redirects to the login page and fails
//! the caller's operation with [`ApiError::SessionExpired`]. Call sites
//! route their failures through [`report`], which suppresses that one
//! variant (the redirect already handled it) and logs everything else.
//!
//! Client-side (wasm32): real HTTP calls via `gloo-net`.
//! Native: stubs returning errors, so state logic stays testable off the
//! browser without ever touching the network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use mask::region::Region;

use crate::net::types::{CaptureStatus, Stats};

/// Failure of a single HTTP operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The device rejected the session. The transport has already
    /// redirected to the login page; callers must not surface this.
    #[error("session expired")]
    SessionExpired,
    /// Non-success HTTP status other than 401.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this is the session-loss marker the transport already
    /// handled with a redirect.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Log a failed operation unless the transport already handled it.
pub fn report(context: &str, err: &ApiError) {
    if !err.is_session_expired() {
        log::warn!("{context}: {err}");
    }
}

/// Map an HTTP status to the transport-level outcome.
///
/// 401 is the session-loss signal from any endpoint; every other
/// non-success status is an ordinary failure local to the operation.
pub fn status_outcome(status: u16) -> Result<(), ApiError> {
    match status {
        401 => Err(ApiError::SessionExpired),
        s if (200..300).contains(&s) => Ok(()),
        s => Err(ApiError::Status(s)),
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().assign(crate::consts::LOGIN_PATH);
    }
}

/// Check a response status, redirecting on session loss.
#[cfg(target_arch = "wasm32")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    let outcome = status_outcome(resp.status());
    if matches!(outcome, Err(ApiError::SessionExpired)) {
        redirect_to_login();
    }
    outcome
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(&resp)?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Load the full region set from the device.
///
/// # Errors
///
/// Fails on network error, non-success status, or a malformed body. The
/// caller leaves its in-memory collection untouched on failure.
pub async fn fetch_regions() -> Result<Vec<Region>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json(crate::consts::PRIVACY_MASK_PATH).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Overwrite the device's region set with the full current collection.
///
/// Whole-state overwrite by design: the device is the sole consumer and
/// this client the sole writer, so last-writer-wins is acceptable.
///
/// # Errors
///
/// Fails on network error or non-success status.
pub async fn save_regions(regions: &[Region]) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(crate::consts::SAVE_PRIVACY_MASK_PATH)
            .json(regions)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = regions;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Poll the capture-in-progress flag.
///
/// # Errors
///
/// Fails on network error, non-success status, or a malformed body.
pub async fn fetch_capture_status() -> Result<CaptureStatus, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json(crate::consts::CAPTURE_STATUS_PATH).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Poll the hardware stats envelope: newest sample plus history.
///
/// # Errors
///
/// Fails on network error, non-success status, or a malformed body.
pub async fn fetch_stats() -> Result<Stats, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_json(crate::consts::STATS_PATH).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the tail of the appliance log as plain text.
///
/// # Errors
///
/// Fails on network error, non-success status, or an unreadable body.
pub async fn fetch_log() -> Result<String, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(crate::consts::LOG_PATH)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        resp.text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Ask the device to schedule an immediate capture.
///
/// # Errors
///
/// Fails on network error or non-success status.
pub async fn trigger_capture() -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(crate::consts::CAPTURE_TRIGGER_PATH)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

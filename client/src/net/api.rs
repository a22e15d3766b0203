//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so session and
//! profile fetch failures degrade UI behavior without crashing hydration. The
//! error string is the server's own message when it sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gates::{ProfileDraft, Role, SessionPayload};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, not(feature = "hydrate")))]
const NOT_AVAILABLE: &str = "not available on server";

/// Human-readable failure for a non-OK response.
///
/// Prefers the `error` field of a JSON body and falls back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
        .and_then(|value| value.get("error").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let body = resp.text().await.ok();
    failure_message(action, resp.status(), body.as_deref())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, String> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the session snapshot from `/api/auth/session`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_session() -> Result<SessionPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("session fetch", resp).await);
        }
        resp.json::<SessionPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct RequestCodeResponse {
    ok: bool,
    #[serde(default)]
    code: Option<String>,
}

/// Request an email sign-in code via `POST /api/auth/email/request-code`.
///
/// Returns the code itself when the server echoes it (local development).
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn request_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/auth/email/request-code", &serde_json::json!({ "email": email })).await?;
        if !resp.ok() {
            return Err(failure("request code", resp).await);
        }
        let body: RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Exchange an email code for a session via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the request fails or the code is rejected.
pub async fn verify_code(email: &str, code: &str) -> Result<SessionPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            post_json("/api/auth/email/verify-code", &serde_json::json!({ "email": email, "code": code })).await?;
        if !resp.ok() {
            return Err(failure("verify code", resp).await);
        }
        resp.json::<SessionPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        // A session that already expired is still logged out.
        if !resp.ok() && resp.status() != 401 {
            return Err(failure("logout", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Record the account type via `POST /api/auth/role`.
///
/// # Errors
///
/// Returns an error string if the request fails or the role is rejected.
pub async fn set_role(role: Role) -> Result<SessionPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/auth/role", &serde_json::json!({ "role": role })).await?;
        if !resp.ok() {
            return Err(failure("role update", resp).await);
        }
        resp.json::<SessionPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Persist the wizard draft via `POST /api/profile`.
///
/// # Errors
///
/// Returns the server's validation message, or a transport error string.
pub async fn submit_profile(draft: &ProfileDraft) -> Result<ProfileDraft, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/profile", draft).await?;
        if !resp.ok() {
            return Err(failure("profile save", resp).await);
        }
        resp.json::<ProfileDraft>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the stored profile via `GET /api/profile`. `Ok(None)` when none exists.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn fetch_profile() -> Result<Option<ProfileDraft>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/profile")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(failure("profile fetch", resp).await);
        }
        resp.json::<ProfileDraft>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

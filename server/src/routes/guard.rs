//! Server-side page guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser guard mounts only after hydration, so a direct request for a
//! protected page would otherwise render its content once before redirecting.
//! This middleware runs the same evaluator against the cookie session ahead
//! of SSR and answers with a redirect instead. API routes are not grouped and
//! pass through untouched.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use gates::{GuardDecision, RouteGroup, SessionSnapshot, evaluate};

use super::auth::session_from_jar;
use crate::services::session::snapshot_for;
use crate::state::AppState;

/// Redirect target for a page request, or `None` to render it.
#[must_use]
pub fn page_redirect(path: &str, snapshot: &SessionSnapshot) -> Option<&'static str> {
    let group = RouteGroup::for_path(path)?;
    match evaluate(snapshot, group.policy()) {
        GuardDecision::Redirect(target) => Some(target),
        GuardDecision::Allow | GuardDecision::Pending => None,
    }
}

pub async fn page_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let Some(group) = RouteGroup::for_path(&path) else {
        return next.run(request).await;
    };

    let jar = CookieJar::from_headers(request.headers());
    let snapshot = match session_from_jar(&state, &jar).await {
        Ok(found) => snapshot_for(found.as_ref().map(|(user, _)| user)),
        Err(e) => {
            // The browser guard still gates the page once hydrated.
            tracing::warn!(error = %e, %path, group = group.as_str(), "page guard session lookup failed");
            return next.run(request).await;
        }
    };

    match page_redirect(&path, &snapshot) {
        Some(target) => {
            tracing::debug!(%path, group = group.as_str(), %target, "page guard redirect");
            Redirect::temporary(target).into_response()
        }
        None => next.run(request).await,
    }
}

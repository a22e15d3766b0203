//! Auth routes: email access-code sign-in, session snapshot, logout, role.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use gates::{Role, SessionPayload};
use serde::Deserialize;
use time::Duration;

use crate::services::email_auth::{self, EmailAuthError};
use crate::services::profile::{self, ProfileServiceError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn session_cookie(token: String, secure: bool, ttl_hours: u64) -> Cookie<'static> {
    let hours = i64::try_from(ttl_hours).unwrap_or(i64::MAX);
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(hours))
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Look up the session behind the request cookie, if any.
pub(crate) async fn session_from_jar(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<(session::SessionUser, String)>, sqlx::Error> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return Ok(None);
    }
    let user = session::validate_session(&state.pool, token).await?;
    Ok(user.map(|user| (user, token.to_owned())))
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeAuthUser(found) = MaybeAuthUser::from_request_parts(parts, state).await?;
        found.ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Session if present; never rejects a signed-out request.
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let found = session_from_jar(&app_state, &jar).await.map_err(|e| {
            tracing::error!(error = %e, "session lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        Ok(Self(found.map(|(user, token)| AuthUser { user, token })))
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn email_auth_error_to_status(err: &EmailAuthError) -> StatusCode {
    match err {
        EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode => StatusCode::BAD_REQUEST,
        EmailAuthError::VerificationFailed => StatusCode::UNAUTHORIZED,
        EmailAuthError::Delivery(_) => StatusCode::BAD_GATEWAY,
        EmailAuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn profile_error_to_status(err: &ProfileServiceError) -> StatusCode {
    match err {
        ProfileServiceError::Invalid(_) | ProfileServiceError::RoleUnset => StatusCode::UNPROCESSABLE_ENTITY,
        ProfileServiceError::RoleLocked { .. } => StatusCode::CONFLICT,
        ProfileServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body. Server errors never expose their detail.
pub(crate) fn error_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    let message = if status.is_server_error() { "internal error".to_owned() } else { message.to_string() };
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/session`: current session snapshot. Signed-out is not an error.
pub async fn current_session(MaybeAuthUser(auth): MaybeAuthUser) -> Json<SessionPayload> {
    Json(auth.map_or_else(SessionPayload::signed_out, |auth| auth.user.payload()))
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

/// `POST /api/auth/email/request-code`: issue and deliver a sign-in code.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    match email_auth::issue_access_code(&state.pool, state.mailer.as_ref(), &body.email).await {
        Ok(issued) => {
            tracing::info!(email = %issued.email, mailer = state.mailer.name(), "access code issued");
            let mut reply = serde_json::json!({ "ok": true });
            if state.config.email_code_echo {
                reply["code"] = serde_json::Value::String(issued.code);
            }
            Json(reply).into_response()
        }
        Err(e) => {
            let status = email_auth_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "access code request failed");
            }
            error_response(status, e)
        }
    }
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

/// `POST /api/auth/email/verify-code`: exchange a code for a session cookie.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let user_id = match email_auth::verify_access_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(e) => {
            let status = email_auth_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "access code verification failed");
            }
            return error_response(status, e);
        }
    };

    let config = &state.config;
    let token = match session::create_session(&state.pool, user_id, config.session_ttl_hours).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to create session");
        }
    };

    let payload = match session::validate_session(&state.pool, &token).await {
        Ok(Some(user)) => user.payload(),
        Ok(None) => SessionPayload::signed_out(),
        Err(e) => {
            tracing::error!(error = %e, "session read-back failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to read session");
        }
    };

    tracing::info!(%user_id, "signed in");
    let jar = jar.add(session_cookie(token, config.cookie_secure, config.session_ttl_hours));
    (jar, Json(payload)).into_response()
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed during logout");
    }
    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct SetRoleBody {
    pub role: Role,
}

/// `POST /api/auth/role`: record the account type chosen during onboarding.
pub async fn set_role(State(state): State<AppState>, auth: AuthUser, Json(body): Json<SetRoleBody>) -> Response {
    if let Err(e) = profile::set_role(&state.pool, auth.user.id, body.role).await {
        let status = profile_error_to_status(&e);
        if status.is_server_error() {
            tracing::error!(error = %e, "role update failed");
        }
        return error_response(status, e);
    }

    match session::validate_session(&state.pool, &auth.token).await {
        Ok(Some(user)) => Json(user.payload()).into_response(),
        Ok(None) => StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session read-back failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to read session")
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

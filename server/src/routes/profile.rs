//! Profile routes backing the creation wizard and the profile view.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use gates::ProfileDraft;

use super::auth::{AuthUser, error_response, profile_error_to_status};
use crate::services::profile;
use crate::state::AppState;

/// `POST /api/profile`: persist the wizard draft. Returns the stored profile.
pub async fn submit_profile(State(state): State<AppState>, auth: AuthUser, Json(draft): Json<ProfileDraft>) -> Response {
    match profile::save_profile(&state.pool, auth.user.id, &draft).await {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(e) => {
            let status = profile_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, user_id = %auth.user.id, "profile save failed");
            }
            error_response(status, e)
        }
    }
}

/// `GET /api/profile`: the caller's stored profile, or 404 when none exists.
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<ProfileDraft>, StatusCode> {
    profile::fetch_profile(&state.pool, auth.user.id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %auth.user.id, "profile fetch failed");
            profile_error_to_status(&e)
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

//! Cookie sessions and the session snapshot served to the client.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token stored in an HttpOnly cookie and in
//! the `sessions` table. Validating a token yields a `SessionUser` which
//! carries everything the guards need: raw metadata (for role resolution) and
//! whether a profile row exists.

use std::fmt::Write;

use gates::{RoleResolution, SessionIdentity, SessionPayload, SessionSnapshot, resolve_role};
use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Raw account metadata. Read the role through [`SessionUser::role`].
    pub metadata: serde_json::Value,
    pub has_profile: bool,
}

impl SessionUser {
    /// Resolve the role from metadata, logging conflicting keys.
    #[must_use]
    pub fn role(&self) -> gates::Role {
        let resolution = resolve_role(&self.metadata);
        if let RoleResolution::Conflict { role, user_type } = resolution {
            tracing::warn!(user_id = %self.id, %role, %user_type, "conflicting role metadata; treating role as unset");
        }
        resolution.role()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::signed_in(self.role(), self.has_profile)
    }

    #[must_use]
    pub fn payload(&self) -> SessionPayload {
        SessionPayload {
            authenticated: true,
            user: Some(SessionIdentity { id: self.id.to_string(), name: self.name.clone(), email: self.email.clone() }),
            role: self.role(),
            has_profile: self.has_profile,
        }
    }
}

/// Snapshot for an optional session: absent users are signed out.
#[must_use]
pub fn snapshot_for(user: Option<&SessionUser>) -> SessionSnapshot {
    user.map_or_else(SessionSnapshot::signed_out, SessionUser::snapshot)
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid, ttl_hours: u64) -> Result<String, sqlx::Error> {
    let token = generate_token();
    let hours = i32::try_from(ttl_hours).unwrap_or(i32::MAX);
    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, now() + make_interval(hours => $3))")
        .bind(&token)
        .bind(user_id)
        .bind(hours)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT
              u.id,
              u.name,
              u.email,
              u.metadata,
              EXISTS (SELECT 1 FROM profiles p WHERE p.user_id = u.id) AS has_profile
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        metadata: r.get("metadata"),
        has_profile: r.get("has_profile"),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

//! Profile persistence and role assignment.
//!
//! The wizard's terminal submit lands here. The draft is re-validated with
//! the same per-step rules the browser used, the chosen role is written to
//! the canonical metadata key, and the profile row is upserted, all in one
//! transaction so the next session read sees role and profile together.

use gates::{ProfileDraft, ProfileError, Role};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("invalid profile: {0}")]
    Invalid(#[from] ProfileError),
    #[error("role must be candidate or employer")]
    RoleUnset,
    #[error("account already has a {stored} profile")]
    RoleLocked { stored: Role },
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// A stored profile pins the account type; only the same role may be re-chosen.
pub(crate) fn check_role_change(stored: Option<Role>, requested: Role) -> Result<(), ProfileServiceError> {
    if !requested.is_set() {
        return Err(ProfileServiceError::RoleUnset);
    }
    match stored {
        Some(stored) if stored != requested => Err(ProfileServiceError::RoleLocked { stored }),
        _ => Ok(()),
    }
}

/// Record the account type picked during sign-up.
///
/// Rejected with [`ProfileServiceError::RoleLocked`] once a profile of the
/// other type exists. Saving a new profile is the way to change it.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), ProfileServiceError> {
    check_role_change(None, role)?;

    let mut tx = pool.begin().await?;
    let stored: Option<String> = sqlx::query_scalar("SELECT role FROM profiles WHERE user_id = $1 FOR UPDATE")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;
    check_role_change(stored.as_deref().and_then(Role::parse), role)?;
    write_role(&mut *tx, user_id, role).await?;
    tx.commit().await?;
    Ok(())
}

/// Write `role` under the canonical metadata key and drop the legacy key.
async fn write_role<'e, E>(executor: E, user_id: Uuid, role: Role) -> Result<(), ProfileServiceError>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r"UPDATE users
          SET metadata = (metadata - $3) || jsonb_build_object($2::text, $4::text)
          WHERE id = $1",
    )
    .bind(user_id)
    .bind(gates::session::ROLE_KEY)
    .bind(gates::session::LEGACY_ROLE_KEY)
    .bind(role.as_str())
    .execute(executor)
    .await?;
    Ok(())
}

/// Validate and persist a wizard draft, returning the stored (normalized) form.
pub async fn save_profile(pool: &PgPool, user_id: Uuid, draft: &ProfileDraft) -> Result<ProfileDraft, ProfileServiceError> {
    draft.validate()?;
    let profile = draft.normalized();
    let data = serde_json::to_value(&profile).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    let mut tx = pool.begin().await?;
    write_role(&mut *tx, user_id, profile.role).await?;
    sqlx::query(
        r"INSERT INTO profiles (user_id, role, data)
          VALUES ($1, $2, $3)
          ON CONFLICT (user_id) DO UPDATE
          SET role = EXCLUDED.role, data = EXCLUDED.data, updated_at = now()",
    )
    .bind(user_id)
    .bind(profile.role.as_str())
    .bind(&data)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::info!(%user_id, role = %profile.role, "profile saved");
    Ok(profile)
}

/// Load the stored profile for `user_id`, if one exists.
pub async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileDraft>, ProfileServiceError> {
    let data: Option<serde_json::Value> = sqlx::query_scalar("SELECT data FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    data.map(|value| serde_json::from_value(value).map_err(|e| sqlx::Error::Decode(Box::new(e))))
        .transpose()
        .map_err(ProfileServiceError::from)
}

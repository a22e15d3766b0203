//! Email access-code sign-in service.
//!
//! Creates and verifies short-lived six-character codes linked to an email.
//! Requesting a code creates the account on first use; the account starts
//! with empty metadata, i.e. without a role.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::mailer::{CodeMailer, DeliveryError};
use super::session::bytes_to_hex;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Code handed back to the route after issuing, for optional echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    pub email: String,
    pub code: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    let well_formed = normalized.len() == CODE_LEN && normalized.bytes().all(|b| CODE_ALPHABET.contains(&b));
    well_formed.then_some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    bytes_to_hex(&Sha256::digest(code.as_bytes()))
}

/// Display name for a new account: the local part of its email.
#[must_use]
pub fn display_name_for(email: &str) -> String {
    email
        .split_once('@')
        .map(|(local, _)| local.trim())
        .filter(|local| !local.is_empty())
        .unwrap_or("member")
        .to_owned()
}

/// Create the account if needed, replace any open code, and deliver a new one.
pub async fn issue_access_code(
    pool: &PgPool,
    mailer: &dyn CodeMailer,
    email: &str,
) -> Result<IssuedCode, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = generate_access_code();

    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO users (email, name) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING")
        .bind(&email)
        .bind(display_name_for(&email))
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE email = $1 AND consumed_at IS NULL")
        .bind(&email)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO email_login_codes (email, code_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind(hash_access_code(&code))
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    mailer.send_code(&email, &code).await?;
    Ok(IssuedCode { email, code })
}

/// Check a code against the newest open code for `email` and return the
/// account it signs in.
///
/// A wrong guess counts against the code; after `MAX_FAILED_ATTEMPTS` the
/// code is burned and a new one must be requested.
pub async fn verify_access_code(pool: &PgPool, email: &str, code: &str) -> Result<Uuid, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;

    let mut tx = pool.begin().await?;
    let open = sqlx::query(
        r"SELECT id, code_hash, attempts
          FROM email_login_codes
          WHERE email = $1 AND consumed_at IS NULL AND expires_at > now()
          ORDER BY created_at DESC
          LIMIT 1
          FOR UPDATE",
    )
    .bind(&email)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(EmailAuthError::VerificationFailed)?;

    let code_id: Uuid = open.get("id");
    let stored_hash: String = open.get("code_hash");
    let attempts: i32 = open.get("attempts");

    if stored_hash != hash_access_code(&code) {
        let burned = attempts + 1 >= MAX_FAILED_ATTEMPTS;
        sqlx::query(
            r"UPDATE email_login_codes
              SET attempts = attempts + 1,
                  consumed_at = CASE WHEN $2 THEN now() ELSE consumed_at END
              WHERE id = $1",
        )
        .bind(code_id)
        .bind(burned)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        return Err(EmailAuthError::VerificationFailed);
    }

    sqlx::query("UPDATE email_login_codes SET consumed_at = now() WHERE id = $1")
        .bind(code_id)
        .execute(&mut *tx)
        .await?;
    let user_id: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&mut *tx)
        .await?;
    tx.commit().await?;

    user_id.ok_or(EmailAuthError::VerificationFailed)
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;

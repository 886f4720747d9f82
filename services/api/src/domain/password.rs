//! argon2 password hashing.

use std::sync::LazyLock;

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::ApiError;

/// Verified against when the email is unknown, so both credential failures cost one argon2 run.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("gavel-dummy-password").ok());

/// Hash `password` with a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// `true` if `password` matches the stored PHC string. An unparsable hash never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Burn one verification for a missing account. Always `false`.
pub fn verify_against_dummy(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| anyhow!("hash password task: {e}"))?
}

/// Check `password` against the account's hash on the blocking pool.
///
/// `None` (unknown account) runs the dummy verification and yields `false`.
pub async fn check_password_blocking(
    password: String,
    password_hash: Option<String>,
) -> Result<bool, ApiError> {
    let matched = tokio::task::spawn_blocking(move || match password_hash {
        Some(hash) => verify_password(&password, &hash),
        None => verify_against_dummy(&password),
    })
    .await
    .map_err(|e| anyhow!("verify password task: {e}"))?;
    Ok(matched)
}

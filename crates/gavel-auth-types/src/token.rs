//! JWT session-token issue and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gavel_domain::user::UserRole;

/// Session-token JWT lifetime and cookie Max-Age in seconds (7 days).
pub const SESSION_TOKEN_EXP: u64 = 604800;

/// User identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub user_role: u8,
    pub exp: u64,
}

/// Errors returned by token issue and validation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | user ID |
/// | `role` | custom | `u8` wire value | see [`UserRole`] |
/// | `exp` | `exp` | seconds since epoch | token expiration |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Sign a session token for `user_id`. Returns the token and its `exp`.
pub fn issue_session_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), AuthError> {
    let exp = now_secs() + SESSION_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.as_u8(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)?;
    Ok((token, exp))
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a session-cookie value, returning the parsed identity.
pub fn validate_session_token(cookie_value: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(cookie_value, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        user_role: claims.role,
        exp: claims.exp,
    })
}

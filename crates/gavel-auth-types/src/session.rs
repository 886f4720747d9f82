//! Session-cookie extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::CookieJar;
use http::request::Parts;
use uuid::Uuid;

use gavel_core::error::AppError;
use gavel_domain::user::UserRole;

use crate::cookie::SESSION_COOKIE;
use crate::token::validate_session_token;

/// HMAC secret used to validate session tokens. Services expose it from
/// their state through `FromRef`.
#[derive(Clone)]
pub struct SessionSecret(pub Arc<str>);

impl SessionSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Authenticated caller, taken from the `token` cookie.
///
/// Rejects with 401 when the cookie is absent, fails validation, or carries
/// an unknown role. Role checks (403) are done by handlers via [`SessionUser::require`].
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl SessionUser {
    /// Ensure the caller holds at least `role`.
    pub fn require(&self, role: UserRole) -> Result<(), AppError> {
        if self.role >= role {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    SessionSecret: FromRef<S>,
{
    type Rejection = AppError;

    // Values are read synchronously so the returned future is 'static.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = SessionSecret::from_ref(state);
        let token = CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty());

        async move {
            let token = token.ok_or(AppError::Unauthorized)?;
            let info =
                validate_session_token(&token, &secret.0).map_err(|_| AppError::Unauthorized)?;
            let role = UserRole::from_u8(info.user_role).ok_or(AppError::Unauthorized)?;
            Ok(Self {
                user_id: info.user_id,
                role,
            })
        }
    }
}

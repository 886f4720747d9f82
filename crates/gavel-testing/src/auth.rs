//! Mock session helpers for router tests.
//!
//! Handlers behind `SessionUser` read the `token` cookie. `MockSession` signs a
//! real session token with the test secret so requests pass the extractor
//! without going through login.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use uuid::Uuid;

use gavel_auth_types::cookie::SESSION_COOKIE;
use gavel_auth_types::token::issue_session_token;
use gavel_domain::user::UserRole;

/// Configurable identity injected into test requests.
pub struct MockSession {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl MockSession {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// `Cookie` header value carrying a session token signed with `secret`.
    pub fn cookie(&self, secret: &str) -> HeaderValue {
        let (token, _) = issue_session_token(self.user_id, self.role, secret)
            .expect("failed to sign test session token");
        HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}"))
            .expect("session token is a valid header value")
    }

    /// Return headers as if the browser sent the session cookie.
    pub fn headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(COOKIE, self.cookie(secret));
        map
    }
}

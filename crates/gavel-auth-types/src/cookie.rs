//! Cookie builders for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::SESSION_TOKEN_EXP;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "token";

fn session_cookie(value: String, domain: Option<String>, max_age: Duration) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    if let Some(domain) = domain {
        cookie.set_domain(domain);
    }
    cookie
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use gavel_auth_types::cookie::{set_session_cookie, SESSION_COOKIE};
///
/// let jar = CookieJar::new();
/// let jar = set_session_cookie(jar, "token_value".to_string(), Some("example.com".to_string()));
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, domain: Option<String>) -> CookieJar {
    jar.add(session_cookie(
        value,
        domain,
        Duration::seconds(SESSION_TOKEN_EXP as i64),
    ))
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use gavel_auth_types::cookie::{clear_session_cookie, set_session_cookie, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".to_string(), None);
/// let jar = clear_session_cookie(jar, None);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, domain: Option<String>) -> CookieJar {
    jar.add(session_cookie(String::new(), domain, Duration::ZERO))
}

//! Cookie builders for the session id and the OAuth `state` round trip.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name carrying the opaque session id.
pub const SESSION_COOKIE: &str = "seekers_session";

/// Cookie name carrying the CSRF `state` of an in-flight Google login.
pub const OAUTH_STATE_COOKIE: &str = "seekers_oauth_state";

/// Lifetime of the OAuth state cookie in seconds (10 minutes).
pub const OAUTH_STATE_TTL_SECS: i64 = 600;

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use seekers_session::cookie::{set_session_cookie, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "abc".to_string(), 3600, true);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "abc");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, session_id: String, ttl_secs: u64, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .max_age(Duration::seconds(ttl_secs as i64))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use seekers_session::cookie::{clear_session_cookie, set_session_cookie, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "abc".to_string(), 3600, false);
/// let jar = clear_session_cookie(jar, false);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Set the OAuth state cookie. Scoped to `/auth/google` so it only travels
/// with the login round trip.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use seekers_session::cookie::{set_oauth_state_cookie, OAUTH_STATE_COOKIE};
///
/// let jar = set_oauth_state_cookie(CookieJar::new(), "xyz".to_string(), false);
/// let cookie = jar.get(OAUTH_STATE_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/auth/google"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(600)));
/// ```
pub fn set_oauth_state_cookie(jar: CookieJar, state: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((OAUTH_STATE_COOKIE, state))
        .path("/auth/google")
        .max_age(Duration::seconds(OAUTH_STATE_TTL_SECS))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the OAuth state cookie once the callback has consumed it.
pub fn clear_oauth_state_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((OAUTH_STATE_COOKIE, ""))
        .path("/auth/google")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

//! Session-backed request extractors.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use seekers_session::cookie::{SESSION_COOKIE, set_session_cookie};
use seekers_session::session::{SessionData, generate_session_id};

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::User;
use crate::error::ForumError;
use crate::state::AppState;

fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

async fn load_user(state: &AppState, session_id: &str) -> Result<Option<User>, ForumError> {
    let Some(data) = state.session_store().load(session_id).await? else {
        return Ok(None);
    };
    let Some(user_id) = data.user_id else {
        return Ok(None);
    };
    state.user_repo().find_by_id(user_id).await
}

/// Logged-in user. Rejects with a redirect to `/login` when the request
/// carries no session, an unknown session, or a session without a user.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: String,
    pub user: User,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session_id = session_id_from_headers(&parts.headers);
        let state = state.clone();

        async move {
            let session_id = session_id.ok_or_else(login_redirect)?;
            let user = load_user(&state, &session_id)
                .await
                .map_err(IntoResponse::into_response)?
                .ok_or_else(login_redirect)?;
            Ok(Self { session_id, user })
        }
    }
}

fn login_redirect() -> Response {
    Redirect::to("/login").into_response()
}

/// The logged-in user if there is one. Never rejects; store failures are
/// logged and treated as anonymous.
#[derive(Debug, Clone, Default)]
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session_id = session_id_from_headers(&parts.headers);
        let state = state.clone();

        async move {
            let Some(session_id) = session_id else {
                return Ok(Self(None));
            };
            match load_user(&state, &session_id).await {
                Ok(user) => Ok(Self(user)),
                Err(e) => {
                    tracing::warn!(error = %e, kind = e.kind(), "session lookup failed");
                    Ok(Self(None))
                }
            }
        }
    }
}

/// Raw session payload, for flows that run before a user exists.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub session_id: Option<String>,
    pub data: SessionData,
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = ForumError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session_id = session_id_from_headers(&parts.headers);
        let state = state.clone();

        async move {
            let Some(session_id) = session_id else {
                return Ok(Self::default());
            };
            let data = state
                .session_store()
                .load(&session_id)
                .await?
                .unwrap_or_default();
            Ok(Self {
                session_id: Some(session_id),
                data,
            })
        }
    }
}

/// Replace whatever session the browser carries with a fresh id holding `data`.
pub async fn start_session(
    store: &impl SessionStore,
    jar: CookieJar,
    data: SessionData,
    ttl_secs: u64,
    secure: bool,
) -> Result<CookieJar, ForumError> {
    if let Some(previous) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
        if !previous.is_empty() {
            store.destroy(&previous).await?;
        }
    }
    let session_id = generate_session_id();
    store.save(&session_id, &data).await?;
    Ok(set_session_cookie(jar, session_id, ttl_secs, secure))
}

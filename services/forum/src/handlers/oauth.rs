use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use seekers_session::cookie::{
    OAUTH_STATE_COOKIE, clear_oauth_state_cookie, set_oauth_state_cookie,
};
use seekers_session::session::{SessionData, generate_token};

use crate::domain::repository::IdentityProviderPort;
use crate::domain::types::IdentityResolution;
use crate::error::ForumError;
use crate::extract::{SessionContext, start_session};
use crate::handlers::account::{UsernameForm, log_in};
use crate::handlers::{ErrorQuery, redirect_with_error};
use crate::state::AppState;
use crate::usecase::identity::{BindUsernameUseCase, ResolveIdentityUseCase};

const OAUTH_STATE_LEN: usize = 32;

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

// ── GET /auth/google ─────────────────────────────────────────────────────────

pub async fn google_login(State(state): State<AppState>, jar: CookieJar) -> Response {
    let csrf_state = generate_token(OAUTH_STATE_LEN);
    match state.identity_provider().authorize_url(&csrf_state) {
        Ok(url) => {
            let jar = set_oauth_state_cookie(jar, csrf_state, state.cookie_secure);
            (jar, Redirect::to(&url)).into_response()
        }
        Err(e) => redirect_with_error("/login", &e).into_response(),
    }
}

// ── GET /auth/google/callback ────────────────────────────────────────────────

pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let expected = jar.get(OAUTH_STATE_COOKIE).map(|c| c.value().to_owned());
    let jar = clear_oauth_state_cookie(jar, state.cookie_secure);

    match complete_login(&state, jar.clone(), expected, query).await {
        Ok((jar, target)) => (jar, Redirect::to(target)).into_response(),
        Err(e) => (jar, redirect_with_error("/login", &e)).into_response(),
    }
}

async fn complete_login(
    state: &AppState,
    jar: CookieJar,
    expected_state: Option<String>,
    query: CallbackQuery,
) -> Result<(CookieJar, &'static str), ForumError> {
    if let Some(error) = query.error {
        return Err(ForumError::Upstream(format!("provider returned error: {error}")));
    }
    match (expected_state.as_deref(), query.state.as_deref()) {
        (Some(expected), Some(got)) if !expected.is_empty() && expected == got => {}
        _ => return Err(ForumError::Unauthenticated),
    }
    let code = query.code.ok_or(ForumError::Unauthenticated)?;

    let usecase = ResolveIdentityUseCase {
        provider: state.identity_provider(),
        users: state.user_repo(),
        identity_key: state.identity_key.clone(),
    };
    match usecase.execute(&code).await? {
        IdentityResolution::Known(user) => Ok((log_in(state, jar, user.id).await?, "/")),
        IdentityResolution::Unknown { identity_hash } => {
            let jar = start_session(
                &state.session_store(),
                jar,
                SessionData::pending(identity_hash),
                state.session_ttl_secs,
                state.cookie_secure,
            )
            .await?;
            Ok((jar, "/registerUsername"))
        }
    }
}

// ── GET /registerUsername ────────────────────────────────────────────────────

pub async fn register_username_page(
    session: SessionContext,
    Query(query): Query<ErrorQuery>,
) -> Response {
    if session.data.pending_identity.is_none() {
        return Redirect::to("/login").into_response();
    }
    Json(query).into_response()
}

// ── POST /registerUsername ───────────────────────────────────────────────────

pub async fn register_username(
    State(state): State<AppState>,
    session: SessionContext,
    jar: CookieJar,
    Form(form): Form<UsernameForm>,
) -> Response {
    let usecase = BindUsernameUseCase {
        repo: state.user_repo(),
    };
    let result = match usecase
        .execute(session.data.pending_identity, &form.username)
        .await
    {
        Ok(user) => log_in(&state, jar, user.id).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(jar) => (jar, Redirect::to("/")).into_response(),
        Err(ForumError::Unauthenticated) => Redirect::to("/login").into_response(),
        Err(e) => redirect_with_error("/registerUsername", &e).into_response(),
    }
}

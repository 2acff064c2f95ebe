use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use seekers_session::cookie::{SESSION_COOKIE, clear_session_cookie};
use seekers_session::session::SessionData;

use crate::domain::repository::SessionStore;
use crate::error::ForumError;
use crate::extract::start_session;
use crate::handlers::{ErrorQuery, redirect_with_error};
use crate::state::AppState;
use crate::usecase::account::{LoginUseCase, RegisterUseCase};

#[derive(Serialize)]
pub struct AuthPageResponse {
    pub error: Option<String>,
    pub local_login_enabled: bool,
}

#[derive(Deserialize)]
pub struct UsernameForm {
    #[serde(default)]
    pub username: String,
}

/// Start a logged-in session for `user_id`, replacing any previous one.
pub async fn log_in(
    state: &AppState,
    jar: CookieJar,
    user_id: Uuid,
) -> Result<CookieJar, ForumError> {
    start_session(
        &state.session_store(),
        jar,
        SessionData::logged_in(user_id),
        state.session_ttl_secs,
        state.cookie_secure,
    )
    .await
}

// ── GET /register, GET /login ────────────────────────────────────────────────

pub async fn auth_page(
    State(state): State<AppState>,
    Query(query): Query<ErrorQuery>,
) -> Json<AuthPageResponse> {
    Json(AuthPageResponse {
        error: query.error,
        local_login_enabled: state.local_login_enabled,
    })
}

// ── POST /register ───────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UsernameForm>,
) -> Response {
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
        enabled: state.local_login_enabled,
    };
    let result = match usecase.execute(&form.username).await {
        Ok(user) => log_in(&state, jar, user.id).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(jar) => (jar, Redirect::to("/")).into_response(),
        Err(e) => redirect_with_error("/register", &e).into_response(),
    }
}

// ── POST /login ──────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UsernameForm>,
) -> Response {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        enabled: state.local_login_enabled,
    };
    let result = match usecase.execute(&form.username).await {
        Ok(user) => log_in(&state, jar, user.id).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(jar) => (jar, Redirect::to("/")).into_response(),
        Err(e) => redirect_with_error("/login", &e).into_response(),
    }
}

// ── GET /logout ──────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(session_id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
        if let Err(e) = state.session_store().destroy(&session_id).await {
            e.log();
        }
    }
    (clear_session_cookie(jar, state.cookie_secure), Redirect::to("/"))
}

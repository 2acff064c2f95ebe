use axum::{
    Form, Json,
    extract::{Query, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use crate::extract::CurrentUser;
use crate::handlers::{ErrorQuery, redirect_with_error, sect_path};
use crate::state::AppState;
use crate::usecase::sect::{FoundSectUseCase, JoinSectUseCase};

#[derive(Serialize)]
pub struct SectPageResponse {
    pub error: Option<String>,
    /// The viewer's current sect.
    pub sect: Option<String>,
}

#[derive(Deserialize)]
pub struct SectForm {
    #[serde(default)]
    pub sect: String,
}

// ── GET /joinSect, GET /foundSect ────────────────────────────────────────────

pub async fn sect_page(current: CurrentUser, Query(query): Query<ErrorQuery>) -> Json<SectPageResponse> {
    Json(SectPageResponse {
        error: query.error,
        sect: current.user.sect,
    })
}

// ── POST /joinSect ───────────────────────────────────────────────────────────

pub async fn join_sect(
    current: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<SectForm>,
) -> Redirect {
    let usecase = JoinSectUseCase {
        sects: state.sect_repo(),
        users: state.user_repo(),
    };
    match usecase.execute(&current.user, &form.sect).await {
        Ok(name) => Redirect::to(&sect_path(&name)),
        Err(e) => redirect_with_error("/joinSect", &e),
    }
}

// ── POST /foundSect ──────────────────────────────────────────────────────────

pub async fn found_sect(
    current: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<SectForm>,
) -> Redirect {
    let usecase = FoundSectUseCase {
        sects: state.sect_repo(),
        users: state.user_repo(),
    };
    match usecase.execute(&current.user, &form.sect).await {
        Ok(name) => Redirect::to(&sect_path(&name)),
        Err(e) => redirect_with_error("/foundSect", &e),
    }
}

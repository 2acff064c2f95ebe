use axum::{Form, Json, extract::State, response::Redirect};
use serde::{Deserialize, Serialize};

use crate::domain::types::AvatarSlot;
use crate::error::ForumError;
use crate::extract::CurrentUser;
use crate::handlers::feed::PostResponse;
use crate::handlers::redirect_with_error;
use crate::state::AppState;
use crate::usecase::profile::{ChooseAvatarUseCase, GetProfileUseCase};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub avatar_img: Option<String>,
    pub avatar_frame: Option<String>,
    #[serde(serialize_with = "seekers_core::serde::to_rfc3339_ms")]
    pub member_since: chrono::DateTime<chrono::Utc>,
    pub sect: Option<String>,
    pub posts: Vec<PostResponse>,
}

#[derive(Deserialize)]
pub struct PicForm {
    #[serde(default)]
    pub pic: String,
}

#[derive(Deserialize)]
pub struct FrameForm {
    #[serde(default)]
    pub frame: String,
}

// ── GET /profile ─────────────────────────────────────────────────────────────

pub async fn get_profile(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ForumError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        posts: state.post_repo(),
    };
    let profile = usecase.execute(current.user.id).await?;
    let user = profile.user;
    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.username,
        avatar_img: user.avatar_img,
        avatar_frame: user.avatar_frame,
        member_since: user.member_since,
        sect: user.sect,
        posts: profile.posts.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /choosePic, POST /chooseFrame ───────────────────────────────────────

pub async fn choose_pic(
    current: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<PicForm>,
) -> Redirect {
    choose(state, current, AvatarSlot::Picture, &form.pic).await
}

pub async fn choose_frame(
    current: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<FrameForm>,
) -> Redirect {
    choose(state, current, AvatarSlot::Frame, &form.frame).await
}

async fn choose(state: AppState, current: CurrentUser, slot: AvatarSlot, reference: &str) -> Redirect {
    let usecase = ChooseAvatarUseCase {
        repo: state.user_repo(),
    };
    match usecase.execute(current.user.id, slot, reference).await {
        Ok(()) => Redirect::to("/profile"),
        Err(e) => redirect_with_error("/profile", &e),
    }
}

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use seekers_domain::feed::{FeedOrder, FeedScope, PostCollection};

use crate::domain::types::{Post, User};
use crate::error::ForumError;
use crate::extract::{CurrentUser, OptionalUser};
use crate::handlers::{back_target, redirect_with_error, sect_path};
use crate::state::AppState;
use crate::usecase::feed::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, LikePostUseCase, ListPostsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    #[serde(serialize_with = "seekers_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub likes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sect: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            username: p.username,
            created_at: p.created_at,
            likes: p.likes,
            sect: p.sect,
        }
    }
}

/// Viewer summary shown alongside a feed.
#[derive(Serialize)]
pub struct ViewerResponse {
    pub username: String,
    pub sect: Option<String>,
    pub avatar_img: Option<String>,
    pub avatar_frame: Option<String>,
}

impl From<User> for ViewerResponse {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            sect: u.sect,
            avatar_img: u.avatar_img,
            avatar_frame: u.avatar_frame,
        }
    }
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub user: Option<ViewerResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sect: Option<String>,
    pub sort: FeedOrder,
    pub posts: Vec<PostResponse>,
}

#[derive(Serialize)]
pub struct LikeResponse {
    pub likes: i64,
}

// ── Query / form params ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct FeedQuery {
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn home(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, ForumError> {
    feed(state, user, FeedScope::Global, query).await
}

// ── GET /sects/{sect} ────────────────────────────────────────────────────────

pub async fn sect_feed(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    Path(sect): Path<String>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, ForumError> {
    feed(state, user, FeedScope::Sect(sect), query).await
}

async fn feed(
    state: AppState,
    user: Option<User>,
    scope: FeedScope,
    query: FeedQuery,
) -> Result<Json<FeedResponse>, ForumError> {
    let order = FeedOrder::from_query(query.sort.as_deref());
    let usecase = ListPostsUseCase {
        repo: state.post_repo(),
    };
    let posts = usecase.execute(&scope, order).await?;
    Ok(Json(FeedResponse {
        user: user.map(Into::into),
        sect: scope.sect().map(str::to_owned),
        sort: order,
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /posts ──────────────────────────────────────────────────────────────

pub async fn create_post(
    current: CurrentUser,
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> Redirect {
    let back = back_target(&headers);
    let usecase = CreatePostUseCase {
        repo: state.post_repo(),
    };
    let input = CreatePostInput {
        title: form.title,
        content: form.content,
        scope: FeedScope::Global,
    };
    match usecase.execute(&current.user, input).await {
        Ok(_) => Redirect::to(&back),
        Err(e) => redirect_with_error(&back, &e),
    }
}

// ── POST /sects/{sect}/posts ─────────────────────────────────────────────────

pub async fn create_sect_post(
    current: CurrentUser,
    State(state): State<AppState>,
    Path(sect): Path<String>,
    Form(form): Form<PostForm>,
) -> Redirect {
    let target = sect_path(&sect);
    let usecase = CreatePostUseCase {
        repo: state.post_repo(),
    };
    let input = CreatePostInput {
        title: form.title,
        content: form.content,
        scope: FeedScope::Sect(sect),
    };
    match usecase.execute(&current.user, input).await {
        Ok(_) => Redirect::to(&target),
        Err(e) => redirect_with_error(&target, &e),
    }
}

// ── POST /like/{id}, POST /like/sects/{id} ───────────────────────────────────

pub async fn like_post(
    _current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LikeResponse>, ForumError> {
    like(state, PostCollection::Posts, id).await
}

pub async fn like_sect_post(
    _current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LikeResponse>, ForumError> {
    like(state, PostCollection::SectPosts, id).await
}

async fn like(
    state: AppState,
    collection: PostCollection,
    id: i64,
) -> Result<Json<LikeResponse>, ForumError> {
    let usecase = LikePostUseCase {
        repo: state.post_repo(),
    };
    let likes = usecase.execute(collection, id).await?;
    Ok(Json(LikeResponse { likes }))
}

// ── POST /delete/{id}, POST /delete/sects/{id} ───────────────────────────────

pub async fn delete_post(
    current: CurrentUser,
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Redirect {
    delete(state, current.user, &headers, PostCollection::Posts, id).await
}

pub async fn delete_sect_post(
    current: CurrentUser,
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Redirect {
    delete(state, current.user, &headers, PostCollection::SectPosts, id).await
}

async fn delete(
    state: AppState,
    user: User,
    headers: &HeaderMap,
    collection: PostCollection,
    id: i64,
) -> Redirect {
    let back = back_target(headers);
    let usecase = DeletePostUseCase {
        repo: state.post_repo(),
    };
    match usecase.execute(collection, id, &user).await {
        Ok(()) => Redirect::to(&back),
        Err(e) => redirect_with_error(&back, &e),
    }
}

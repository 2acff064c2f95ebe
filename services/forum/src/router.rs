use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use seekers_core::health::healthz;
use seekers_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    account::{auth_page, login, logout, register},
    error_page,
    feed::{
        create_post, create_sect_post, delete_post, delete_sect_post, home, like_post,
        like_sect_post, sect_feed,
    },
    oauth::{google_callback, google_login, register_username, register_username_page},
    profile::{choose_frame, choose_pic, get_profile},
    readyz,
    sect::{found_sect, join_sect, sect_page},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Feeds
        .route("/", get(home))
        .route("/posts", post(create_post))
        .route("/sects/{sect}", get(sect_feed))
        .route("/sects/{sect}/posts", post(create_sect_post))
        .route("/like/{id}", post(like_post))
        .route("/like/sects/{id}", post(like_sect_post))
        .route("/delete/{id}", post(delete_post))
        .route("/delete/sects/{id}", post(delete_sect_post))
        // Accounts
        .route("/register", get(auth_page).post(register))
        .route("/login", get(auth_page).post(login))
        .route("/logout", get(logout))
        // Google identity
        .route("/auth/google", get(google_login))
        .route("/auth/google/callback", get(google_callback))
        .route(
            "/registerUsername",
            get(register_username_page).post(register_username),
        )
        // Sects
        .route("/joinSect", get(sect_page).post(join_sect))
        .route("/foundSect", get(sect_page).post(found_sect))
        // Profile
        .route("/profile", get(get_profile))
        .route("/choosePic", post(choose_pic))
        .route("/chooseFrame", post(choose_frame))
        .route("/error", get(error_page))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}

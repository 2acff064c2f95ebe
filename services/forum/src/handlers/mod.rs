pub mod account;
pub mod feed;
pub mod oauth;
pub mod profile;
pub mod sect;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Redirect;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ForumError;
use crate::state::AppState;

/// `?error=` carried on form pages after a failed submission.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Redirect to `path` with the error message attached as `?error=`.
pub fn redirect_with_error(path: &str, error: &ForumError) -> Redirect {
    error.log();
    let query = ErrorQuery {
        error: Some(error.to_string()),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) => Redirect::to(&format!("{path}?{qs}")),
        Err(_) => Redirect::to(path),
    }
}

/// Path of the `Referer` header, or `/`. Scheme and host are dropped, and a
/// path that a browser would read as protocol-relative (`//host/..`, `/\host`)
/// is replaced by `/`.
pub fn back_target(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Url::parse(v).ok())
        .map(|url| url.path().to_owned())
        .filter(|path| is_local_path(path))
        .unwrap_or_else(|| "/".to_owned())
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Percent-encoded `/sects/{name}` path.
pub fn sect_path(sect: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/sects") else {
        return "/".to_owned();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(sect);
    }
    url.path().to_owned()
}

// ── GET /error ───────────────────────────────────────────────────────────────

pub async fn error_page(Query(query): Query<ErrorQuery>) -> Json<ErrorQuery> {
    Json(query)
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Forum service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ForumError {
    #[error("post not found")]
    PostNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("username already exists")]
    UsernameTaken,
    #[error("sect already exists")]
    SectAlreadyExists,
    #[error("sect not found")]
    SectNotFound,
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid sect name")]
    InvalidSectName,
    #[error("invalid avatar")]
    InvalidAvatar,
    #[error("missing data")]
    MissingData,
    #[error("local login disabled")]
    LocalLoginDisabled,
    #[error("forbidden")]
    Forbidden,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("identity provider unavailable")]
    Upstream(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ForumError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::SectAlreadyExists => "SECT_ALREADY_EXISTS",
            Self::SectNotFound => "SECT_NOT_FOUND",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidSectName => "INVALID_SECT_NAME",
            Self::InvalidAvatar => "INVALID_AVATAR",
            Self::MissingData => "MISSING_DATA",
            Self::LocalLoginDisabled => "LOCAL_LOGIN_DISABLED",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Upstream(_) => "UPSTREAM",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::PostNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::UsernameTaken | Self::SectAlreadyExists | Self::SectNotFound => {
                StatusCode::CONFLICT
            }
            Self::InvalidUsername
            | Self::InvalidSectName
            | Self::InvalidAvatar
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::LocalLoginDisabled | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log server-side failures. 4xx are expected client errors and stay quiet;
    /// tower-http TraceLayer already records method/uri/status for every request.
    pub fn log(&self) {
        match self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::Upstream(e) => tracing::warn!(error = %e, kind = "UPSTREAM", "upstream error"),
            _ => {}
        }
    }
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use seekers_forum::infra::google::GoogleIdentityProvider;
use seekers_forum::router::build_router;
use seekers_forum::state::AppState;

/// State whose stores are unreachable: the database is disconnected and the
/// Redis pool points at a closed port. Routes under test must answer before
/// touching either, or fail the way an outage would.
fn offline_state(local_login_enabled: bool) -> AppState {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .unwrap();
    AppState {
        db: DatabaseConnection::Disconnected,
        redis,
        google: GoogleIdentityProvider::new(
            "client-123".to_owned(),
            "secret".to_owned(),
            "http://localhost:3000/auth/google/callback".to_owned(),
        ),
        identity_key: "test-identity-key".to_owned(),
        session_ttl_secs: 3600,
        cookie_secure: false,
        local_login_enabled,
    }
}

fn server(local_login_enabled: bool) -> TestServer {
    TestServer::new(build_router(offline_state(local_login_enabled))).unwrap()
}

fn location(resp: &axum_test::TestResponse) -> String {
    resp.header(header::LOCATION).to_str().unwrap().to_owned()
}

fn cookie_header(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::COOKIE, HeaderValue::from_static(value))
}

#[tokio::test]
async fn should_answer_liveness_probe() {
    let resp = server(true).get("/healthz").await;
    resp.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let resp = server(true).get("/readyz").await;
    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let resp = server(true).get("/healthz").await;
    let id = resp.header("x-request-id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn should_redirect_protected_routes_to_login() {
    let server = server(true);

    for path in ["/profile", "/joinSect", "/foundSect"] {
        let resp = server.get(path).await;
        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login", "GET {path}");
    }

    for path in [
        "/posts",
        "/like/1",
        "/like/sects/1",
        "/delete/1",
        "/delete/sects/1",
        "/choosePic",
        "/sects/Doan%20Sect/posts",
    ] {
        let resp = server.post(path).await;
        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login", "POST {path}");
    }
}

#[tokio::test]
async fn should_render_store_outage_as_internal_error() {
    let resp = server(true).get("/").await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
}

#[tokio::test]
async fn should_send_browser_to_google_with_state_cookie() {
    let resp = server(true).get("/auth/google").await;
    resp.assert_status(StatusCode::SEE_OTHER);

    let target = location(&resp);
    assert!(
        target.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"),
        "{target}"
    );

    let state_cookie = resp.cookie("seekers_oauth_state");
    assert!(!state_cookie.value().is_empty());
    assert!(target.contains(&format!("state={}", state_cookie.value())));
}

#[tokio::test]
async fn should_reject_callback_with_mismatched_state() {
    let (name, value) = cookie_header("seekers_oauth_state=expected-state");
    let resp = server(true)
        .get("/auth/google/callback?code=abc&state=forged-state")
        .add_header(name, value)
        .await;

    resp.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&resp).starts_with("/login?error="));
}

#[tokio::test]
async fn should_reject_callback_without_state_cookie() {
    let resp = server(true)
        .get("/auth/google/callback?code=abc&state=some-state")
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&resp).starts_with("/login?error="));
}

#[tokio::test]
async fn should_reject_callback_carrying_provider_error() {
    let (name, value) = cookie_header("seekers_oauth_state=s");
    let resp = server(true)
        .get("/auth/google/callback?error=access_denied&state=s")
        .add_header(name, value)
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&resp).starts_with("/login?error="));
}

#[tokio::test]
async fn should_echo_error_on_auth_pages() {
    let server = server(true);

    let resp = server.get("/register").await;
    resp.assert_status(StatusCode::OK);
    resp.assert_json(&json!({ "error": null, "local_login_enabled": true }));

    let resp = server.get("/login?error=user%20not%20found").await;
    resp.assert_json(&json!({ "error": "user not found", "local_login_enabled": true }));
}

#[tokio::test]
async fn should_refuse_local_registration_when_disabled() {
    let resp = server(false)
        .post("/register")
        .form(&[("username", "andy")])
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&resp).starts_with("/register?error=local"));
}

#[tokio::test]
async fn should_send_anonymous_username_binding_to_login() {
    let resp = server(true).get("/registerUsername").await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn should_clear_session_cookie_on_logout() {
    let resp = server(true).get("/logout").await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert_eq!(resp.cookie("seekers_session").value(), "");
}

#[tokio::test]
async fn should_render_error_page() {
    let server = server(true);

    let resp = server.get("/error?error=boom").await;
    resp.assert_json(&json!({ "error": "boom" }));

    let resp = server.get("/error").await;
    resp.assert_json(&json!({}));
}

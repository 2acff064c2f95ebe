use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tokio::signal;
use tracing::info;

use seekers_core::config::Config;
use seekers_core::tracing::init_tracing;
use seekers_forum::config::ForumConfig;
use seekers_forum::infra::google::GoogleIdentityProvider;
use seekers_forum::router::build_router;
use seekers_forum::state::AppState;
use seekers_forum_migration::Migrator;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ForumConfig::from_env().expect("failed to load forum config");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let redis = deadpool_redis::Config::from_url(&config.redis_url)
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create redis pool");

    let google = GoogleIdentityProvider::new(
        config.google_client_id,
        config.google_client_secret,
        config.google_redirect_url,
    );

    let state = AppState {
        db: db.clone(),
        redis,
        google,
        identity_key: config.identity_key,
        session_ttl_secs: config.session_ttl_secs,
        cookie_secure: config.cookie_secure,
        local_login_enabled: config.local_login_enabled,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.forum_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("forum service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    db.close().await.expect("failed to close database");
    info!("forum service stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

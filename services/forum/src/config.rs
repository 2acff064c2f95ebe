use serde::Deserialize;

use seekers_core::config::Config;

/// Forum service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ForumConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Redis connection URL for the session store. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `FORUM_PORT`.
    #[serde(default = "default_forum_port")]
    pub forum_port: u16,
    /// HMAC key for deriving stored identity hashes. Rotating it orphans every
    /// Google-bound account. Env var: `IDENTITY_KEY`.
    pub identity_key: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    /// Must match the redirect URI registered with Google,
    /// e.g. "http://localhost:3000/auth/google/callback".
    pub google_redirect_url: String,
    /// Mark cookies `Secure` (default false for plain-http development).
    #[serde(default)]
    pub cookie_secure: bool,
    /// Session lifetime in seconds (default 7 days).
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Allow username-only `POST /register` and `POST /login` (default true).
    #[serde(default = "default_local_login_enabled")]
    pub local_login_enabled: bool,
}

impl Config for ForumConfig {}

fn default_forum_port() -> u16 {
    3000
}

fn default_session_ttl_secs() -> u64 {
    604_800
}

fn default_local_login_enabled() -> bool {
    true
}

use deadpool_redis::Pool;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPostRepository, DbSectRepository, DbUserRepository};
use crate::infra::google::GoogleIdentityProvider;
use crate::infra::session::RedisSessionStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: Pool,
    pub google: GoogleIdentityProvider,
    /// HMAC key for identity hashes.
    pub identity_key: String,
    pub session_ttl_secs: u64,
    pub cookie_secure: bool,
    pub local_login_enabled: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn post_repo(&self) -> DbPostRepository {
        DbPostRepository {
            db: self.db.clone(),
        }
    }

    pub fn sect_repo(&self) -> DbSectRepository {
        DbSectRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_store(&self) -> RedisSessionStore {
        RedisSessionStore {
            pool: self.redis.clone(),
            ttl_secs: self.session_ttl_secs,
        }
    }

    pub fn identity_provider(&self) -> GoogleIdentityProvider {
        self.google.clone()
    }
}

use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use seekers_session::session::SessionData;

use crate::domain::repository::SessionStore;
use crate::error::ForumError;

/// Sessions stored as JSON under `session:{id}`. The TTL is fixed at login to
/// match the cookie Max-Age; `load` does not extend it.
#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
    pub ttl_secs: u64,
}

fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}

impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, ForumError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ForumError::Internal(e.into()))?;
        let value: Option<String> = conn
            .get(session_key(session_id))
            .await
            .map_err(|e| ForumError::Internal(e.into()))?;
        match value {
            Some(json) => {
                // A payload we cannot read is treated as no session at all.
                match serde_json::from_str(&json) {
                    Ok(data) => Ok(Some(data)),
                    Err(e) => {
                        tracing::warn!(error = %e, "discarding unreadable session payload");
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }

    async fn save(&self, session_id: &str, data: &SessionData) -> Result<(), ForumError> {
        let json = serde_json::to_string(data).map_err(|e| ForumError::Internal(e.into()))?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ForumError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(session_key(session_id), json, self.ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| ForumError::Internal(e.into()))?;
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), ForumError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| ForumError::Internal(e.into()))?;
        let (): () = conn
            .del(session_key(session_id))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| ForumError::Internal(e.into()))?;
        Ok(())
    }
}

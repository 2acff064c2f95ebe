//! Server-side session payload.

use rand::RngExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session id length in characters.
pub const SESSION_ID_LEN: usize = 48;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate an opaque random token, used for session ids and OAuth state.
pub fn generate_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn generate_session_id() -> String {
    generate_token(SESSION_ID_LEN)
}

/// Data stored in the session store under the session id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Logged-in user. `None` means anonymous.
    pub user_id: Option<Uuid>,
    /// Identity hash of a provider login that has no user yet. Set by the
    /// OAuth callback, consumed by username binding.
    pub pending_identity: Option<String>,
}

impl SessionData {
    pub fn logged_in(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            pending_identity: None,
        }
    }

    pub fn pending(identity_hash: String) -> Self {
        Self {
            user_id: None,
            pending_identity: Some(identity_hash),
        }
    }
}

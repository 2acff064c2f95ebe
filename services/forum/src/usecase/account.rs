use seekers_domain::user::validate_username;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ForumError;

/// Validate and insert a new user, optionally bound to a provider identity.
pub(crate) async fn create_user<R: UserRepository>(
    repo: &R,
    username: &str,
    identity_hash: Option<String>,
) -> Result<User, ForumError> {
    if !validate_username(username) {
        return Err(ForumError::InvalidUsername);
    }
    let username = username.trim();
    if repo.find_by_username(username).await?.is_some() {
        return Err(ForumError::UsernameTaken);
    }
    let user = User::new(username.to_owned(), identity_hash);
    // Unique index on username settles a race with a concurrent registration.
    if !repo.create(&user).await? {
        return Err(ForumError::UsernameTaken);
    }
    tracing::info!(user_id = %user.id, username = %user.username, "user created");
    Ok(user)
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
    pub enabled: bool,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<User, ForumError> {
        if !self.enabled {
            return Err(ForumError::LocalLoginDisabled);
        }
        create_user(&self.repo, username, None).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub enabled: bool,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<User, ForumError> {
        if !self.enabled {
            return Err(ForumError::LocalLoginDisabled);
        }
        self.repo
            .find_by_username(username.trim())
            .await?
            .ok_or(ForumError::UserNotFound)
    }
}

use seekers_session::identity::derive_identity_hash;

use crate::domain::repository::{IdentityProviderPort, UserRepository};
use crate::domain::types::{GOOGLE_PROVIDER, IdentityResolution, User};
use crate::error::ForumError;
use crate::usecase::account::create_user;

// ── ResolveIdentity ──────────────────────────────────────────────────────────

pub struct ResolveIdentityUseCase<P: IdentityProviderPort, R: UserRepository> {
    pub provider: P,
    pub users: R,
    pub identity_key: String,
}

impl<P: IdentityProviderPort, R: UserRepository> ResolveIdentityUseCase<P, R> {
    /// Exchange the authorization code and match the resulting subject against
    /// stored identity hashes through the unique index.
    pub async fn execute(&self, code: &str) -> Result<IdentityResolution, ForumError> {
        let subject = self.provider.resolve_subject(code).await?;
        let identity_hash =
            derive_identity_hash(self.identity_key.as_bytes(), GOOGLE_PROVIDER, &subject);
        match self.users.find_by_identity_hash(&identity_hash).await? {
            Some(user) => Ok(IdentityResolution::Known(user)),
            None => Ok(IdentityResolution::Unknown { identity_hash }),
        }
    }
}

// ── BindUsername ─────────────────────────────────────────────────────────────

pub struct BindUsernameUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> BindUsernameUseCase<R> {
    /// Create the user for a pending provider identity.
    pub async fn execute(
        &self,
        pending_identity: Option<String>,
        username: &str,
    ) -> Result<User, ForumError> {
        let identity_hash = pending_identity.ok_or(ForumError::Unauthenticated)?;
        if let Some(user) = self.repo.find_by_identity_hash(&identity_hash).await? {
            // Bound by an earlier request of the same login (double submit).
            return Ok(user);
        }
        match create_user(&self.repo, username, Some(identity_hash.clone())).await {
            // A concurrent bind of the same identity under another name wins
            // the unique identity index; hand back that user.
            Err(ForumError::UsernameTaken) => self
                .repo
                .find_by_identity_hash(&identity_hash)
                .await?
                .ok_or(ForumError::UsernameTaken),
            other => other,
        }
    }
}

use uuid::Uuid;

use seekers_domain::avatar::validate_avatar_ref;

use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::types::{AvatarSlot, Post, User};
use crate::error::ForumError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct Profile {
    pub user: User,
    pub posts: Vec<Post>,
}

pub struct GetProfileUseCase<U: UserRepository, P: PostRepository> {
    pub users: U,
    pub posts: P,
}

impl<U: UserRepository, P: PostRepository> GetProfileUseCase<U, P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, ForumError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ForumError::UserNotFound)?;
        let posts = self.posts.list_by_author(&user.username).await?;
        Ok(Profile { user, posts })
    }
}

// ── ChooseAvatar ─────────────────────────────────────────────────────────────

pub struct ChooseAvatarUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ChooseAvatarUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        slot: AvatarSlot,
        reference: &str,
    ) -> Result<(), ForumError> {
        if !validate_avatar_ref(reference) {
            return Err(ForumError::InvalidAvatar);
        }
        self.repo.update_avatar(user_id, slot, reference).await
    }
}

#![allow(async_fn_in_trait)]

use uuid::Uuid;

use seekers_domain::feed::{FeedOrder, FeedScope, PostCollection};
use seekers_session::session::SessionData;

use crate::domain::types::{AvatarSlot, NewPost, Post, Sect, User};
use crate::error::ForumError;

/// Repository for forum members.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ForumError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ForumError>;
    async fn find_by_identity_hash(&self, identity_hash: &str)
    -> Result<Option<User>, ForumError>;

    /// Insert a user. Returns `false` if the username or identity hash is
    /// already taken.
    async fn create(&self, user: &User) -> Result<bool, ForumError>;

    async fn update_avatar(
        &self,
        id: Uuid,
        slot: AvatarSlot,
        reference: &str,
    ) -> Result<(), ForumError>;

    async fn update_sect(&self, id: Uuid, sect: &str) -> Result<(), ForumError>;
}

/// Repository for global and sect posts.
pub trait PostRepository: Send + Sync {
    async fn list(&self, scope: &FeedScope, order: FeedOrder) -> Result<Vec<Post>, ForumError>;

    /// Global posts by one author, newest first.
    async fn list_by_author(&self, username: &str) -> Result<Vec<Post>, ForumError>;

    async fn find(&self, collection: PostCollection, id: i64)
    -> Result<Option<Post>, ForumError>;

    async fn create(&self, post: &NewPost) -> Result<Post, ForumError>;

    /// Add one like. Returns the new count, or `None` if no such post.
    async fn increment_likes(
        &self,
        collection: PostCollection,
        id: i64,
    ) -> Result<Option<i64>, ForumError>;

    /// Delete a post. Returns `true` if a row was deleted.
    async fn delete(&self, collection: PostCollection, id: i64) -> Result<bool, ForumError>;
}

/// Registry of sects.
pub trait SectRepository: Send + Sync {
    async fn exists(&self, name: &str) -> Result<bool, ForumError>;

    /// Register a sect. Returns `false` if the name is already registered.
    async fn create(&self, sect: &Sect) -> Result<bool, ForumError>;
}

/// Server-side session storage keyed by the opaque session id.
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, ForumError>;
    async fn save(&self, session_id: &str, data: &SessionData) -> Result<(), ForumError>;
    async fn destroy(&self, session_id: &str) -> Result<(), ForumError>;
}

/// Port for the external identity provider's authorization-code flow.
pub trait IdentityProviderPort: Send + Sync {
    /// URL the browser is sent to for login, carrying the CSRF `state`.
    fn authorize_url(&self, state: &str) -> Result<String, ForumError>;

    /// Exchange an authorization code for the provider's stable subject id.
    async fn resolve_subject(&self, code: &str) -> Result<String, ForumError>;
}

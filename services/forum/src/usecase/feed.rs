use chrono::Utc;

use seekers_domain::feed::{FeedOrder, FeedScope, PostCollection};

use crate::domain::repository::PostRepository;
use crate::domain::types::{NewPost, Post, User};
use crate::error::ForumError;

// ── ListPosts ────────────────────────────────────────────────────────────────

pub struct ListPostsUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> ListPostsUseCase<R> {
    pub async fn execute(&self, scope: &FeedScope, order: FeedOrder) -> Result<Vec<Post>, ForumError> {
        self.repo.list(scope, order).await
    }
}

// ── CreatePost ───────────────────────────────────────────────────────────────

pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub scope: FeedScope,
}

pub struct CreatePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> CreatePostUseCase<R> {
    /// Sect posts are only accepted into the author's current sect.
    pub async fn execute(&self, author: &User, input: CreatePostInput) -> Result<Post, ForumError> {
        let title = input.title.trim();
        let content = input.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ForumError::MissingData);
        }
        if let Some(sect) = input.scope.sect() {
            if author.sect.as_deref() != Some(sect) {
                return Err(ForumError::Forbidden);
            }
        }
        self.repo
            .create(&NewPost {
                title: title.to_owned(),
                content: content.to_owned(),
                username: author.username.clone(),
                created_at: Utc::now(),
                likes: 0,
                sect: input.scope.sect().map(str::to_owned),
            })
            .await
    }
}

// ── LikePost ─────────────────────────────────────────────────────────────────

pub struct LikePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> LikePostUseCase<R> {
    /// Returns the like count after the increment.
    pub async fn execute(&self, collection: PostCollection, id: i64) -> Result<i64, ForumError> {
        self.repo
            .increment_likes(collection, id)
            .await?
            .ok_or(ForumError::PostNotFound)
    }
}

// ── DeletePost ───────────────────────────────────────────────────────────────

pub struct DeletePostUseCase<R: PostRepository> {
    pub repo: R,
}

impl<R: PostRepository> DeletePostUseCase<R> {
    /// Only the author may delete a post.
    pub async fn execute(
        &self,
        collection: PostCollection,
        id: i64,
        requester: &User,
    ) -> Result<(), ForumError> {
        let post = self
            .repo
            .find(collection, id)
            .await?
            .ok_or(ForumError::PostNotFound)?;
        if post.username != requester.username {
            return Err(ForumError::Forbidden);
        }
        if !self.repo.delete(collection, id).await? {
            return Err(ForumError::PostNotFound);
        }
        tracing::info!(post_id = id, ?collection, username = %requester.username, "post deleted");
        Ok(())
    }
}

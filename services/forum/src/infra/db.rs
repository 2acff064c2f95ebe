use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use seekers_domain::feed::{FeedOrder, FeedScope, PostCollection};
use seekers_forum_schema::{posts, sect_posts, sects, users};

use crate::domain::repository::{PostRepository, SectRepository, UserRepository};
use crate::domain::types::{AvatarSlot, NewPost, Post, Sect, User};
use crate::error::ForumError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ForumError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ForumError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_identity_hash(
        &self,
        identity_hash: &str,
    ) -> Result<Option<User>, ForumError> {
        let model = users::Entity::find()
            .filter(users::Column::IdentityHash.eq(identity_hash))
            .one(&self.db)
            .await
            .context("find user by identity hash")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<bool, ForumError> {
        let model = users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            identity_hash: Set(user.identity_hash.clone()),
            avatar_img: Set(user.avatar_img.clone()),
            avatar_frame: Set(user.avatar_frame.clone()),
            member_since: Set(user.member_since),
            sect: Set(user.sect.clone()),
        };
        let inserted = users::Entity::insert(model)
            // No conflict target: yields to both the username and identity_hash
            // unique indexes.
            .on_conflict(OnConflict::new().do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .context("create user")?;
        Ok(inserted > 0)
    }

    async fn update_avatar(
        &self,
        id: Uuid,
        slot: AvatarSlot,
        reference: &str,
    ) -> Result<(), ForumError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        match slot {
            AvatarSlot::Picture => am.avatar_img = Set(Some(reference.to_owned())),
            AvatarSlot::Frame => am.avatar_frame = Set(Some(reference.to_owned())),
        }
        am.update(&self.db).await.context("update user avatar")?;
        Ok(())
    }

    async fn update_sect(&self, id: Uuid, sect: &str) -> Result<(), ForumError> {
        let am = users::ActiveModel {
            id: Set(id),
            sect: Set(Some(sect.to_owned())),
            ..Default::default()
        };
        am.update(&self.db).await.context("update user sect")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        identity_hash: model.identity_hash,
        avatar_img: model.avatar_img,
        avatar_frame: model.avatar_frame,
        member_since: model.member_since,
        sect: model.sect,
    }
}

// ── Post repository (global + sect) ─────────────────────────────────────────

#[derive(Clone)]
pub struct DbPostRepository {
    pub db: DatabaseConnection,
}

impl PostRepository for DbPostRepository {
    async fn list(&self, scope: &FeedScope, order: FeedOrder) -> Result<Vec<Post>, ForumError> {
        match scope {
            FeedScope::Global => {
                let query = posts::Entity::find();
                let query = match order {
                    FeedOrder::Newest => query
                        .order_by_desc(posts::Column::CreatedAt)
                        .order_by_desc(posts::Column::Id),
                    FeedOrder::Oldest => query
                        .order_by_asc(posts::Column::CreatedAt)
                        .order_by_asc(posts::Column::Id),
                    FeedOrder::MostLiked => query
                        .order_by_desc(posts::Column::Likes)
                        .order_by_desc(posts::Column::Id),
                };
                let models = query.all(&self.db).await.context("list posts")?;
                Ok(models.into_iter().map(post_from_model).collect())
            }
            FeedScope::Sect(sect) => {
                let query = sect_posts::Entity::find()
                    .filter(sect_posts::Column::Sect.eq(sect.as_str()));
                let query = match order {
                    FeedOrder::Newest => query
                        .order_by_desc(sect_posts::Column::CreatedAt)
                        .order_by_desc(sect_posts::Column::Id),
                    FeedOrder::Oldest => query
                        .order_by_asc(sect_posts::Column::CreatedAt)
                        .order_by_asc(sect_posts::Column::Id),
                    FeedOrder::MostLiked => query
                        .order_by_desc(sect_posts::Column::Likes)
                        .order_by_desc(sect_posts::Column::Id),
                };
                let models = query.all(&self.db).await.context("list sect posts")?;
                Ok(models.into_iter().map(sect_post_from_model).collect())
            }
        }
    }

    async fn list_by_author(&self, username: &str) -> Result<Vec<Post>, ForumError> {
        let models = posts::Entity::find()
            .filter(posts::Column::Username.eq(username))
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .all(&self.db)
            .await
            .context("list posts by author")?;
        Ok(models.into_iter().map(post_from_model).collect())
    }

    async fn find(&self, collection: PostCollection, id: i64) -> Result<Option<Post>, ForumError> {
        match collection {
            PostCollection::Posts => {
                let model = posts::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .context("find post")?;
                Ok(model.map(post_from_model))
            }
            PostCollection::SectPosts => {
                let model = sect_posts::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .context("find sect post")?;
                Ok(model.map(sect_post_from_model))
            }
        }
    }

    async fn create(&self, post: &NewPost) -> Result<Post, ForumError> {
        match &post.sect {
            None => {
                let model = posts::ActiveModel {
                    title: Set(post.title.clone()),
                    content: Set(post.content.clone()),
                    username: Set(post.username.clone()),
                    created_at: Set(post.created_at),
                    likes: Set(post.likes),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("create post")?;
                Ok(post_from_model(model))
            }
            Some(sect) => {
                let model = sect_posts::ActiveModel {
                    title: Set(post.title.clone()),
                    content: Set(post.content.clone()),
                    username: Set(post.username.clone()),
                    created_at: Set(post.created_at),
                    likes: Set(post.likes),
                    sect: Set(sect.clone()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .context("create sect post")?;
                Ok(sect_post_from_model(model))
            }
        }
    }

    async fn increment_likes(
        &self,
        collection: PostCollection,
        id: i64,
    ) -> Result<Option<i64>, ForumError> {
        // Single UPDATE ... RETURNING; no read-modify-write.
        match collection {
            PostCollection::Posts => {
                let models = posts::Entity::update_many()
                    .col_expr(posts::Column::Likes, Expr::col(posts::Column::Likes).add(1))
                    .filter(posts::Column::Id.eq(id))
                    .exec_with_returning(&self.db)
                    .await
                    .context("increment post likes")?;
                Ok(models.into_iter().next().map(|m| m.likes))
            }
            PostCollection::SectPosts => {
                let models = sect_posts::Entity::update_many()
                    .col_expr(
                        sect_posts::Column::Likes,
                        Expr::col(sect_posts::Column::Likes).add(1),
                    )
                    .filter(sect_posts::Column::Id.eq(id))
                    .exec_with_returning(&self.db)
                    .await
                    .context("increment sect post likes")?;
                Ok(models.into_iter().next().map(|m| m.likes))
            }
        }
    }

    async fn delete(&self, collection: PostCollection, id: i64) -> Result<bool, ForumError> {
        let result = match collection {
            PostCollection::Posts => posts::Entity::delete_by_id(id)
                .exec(&self.db)
                .await
                .context("delete post")?,
            PostCollection::SectPosts => sect_posts::Entity::delete_by_id(id)
                .exec(&self.db)
                .await
                .context("delete sect post")?,
        };
        Ok(result.rows_affected > 0)
    }
}

fn post_from_model(model: posts::Model) -> Post {
    Post {
        id: model.id,
        title: model.title,
        content: model.content,
        username: model.username,
        created_at: model.created_at,
        likes: model.likes,
        sect: None,
    }
}

fn sect_post_from_model(model: sect_posts::Model) -> Post {
    Post {
        id: model.id,
        title: model.title,
        content: model.content,
        username: model.username,
        created_at: model.created_at,
        likes: model.likes,
        sect: Some(model.sect),
    }
}

// ── Sect repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSectRepository {
    pub db: DatabaseConnection,
}

impl SectRepository for DbSectRepository {
    async fn exists(&self, name: &str) -> Result<bool, ForumError> {
        let model = sects::Entity::find_by_id(name.to_owned())
            .one(&self.db)
            .await
            .context("find sect")?;
        Ok(model.is_some())
    }

    async fn create(&self, sect: &Sect) -> Result<bool, ForumError> {
        let model = sects::ActiveModel {
            name: Set(sect.name.clone()),
            founded_by: Set(sect.founded_by),
            created_at: Set(sect.created_at),
        };
        let inserted = sects::Entity::insert(model)
            .on_conflict(OnConflict::column(sects::Column::Name).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .context("create sect")?;
        Ok(inserted > 0)
    }
}

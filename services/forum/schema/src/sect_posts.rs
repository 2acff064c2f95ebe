use sea_orm::entity::prelude::*;

/// Post scoped to a sect feed. `sect` is a plain name, not a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sect_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub likes: i64,
    pub sect: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

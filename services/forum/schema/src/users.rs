use sea_orm::entity::prelude::*;

/// Forum member. `identity_hash` is null for locally registered users.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub identity_hash: Option<String>,
    pub avatar_img: Option<String>,
    pub avatar_frame: Option<String>,
    pub member_since: chrono::DateTime<chrono::Utc>,
    pub sect: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

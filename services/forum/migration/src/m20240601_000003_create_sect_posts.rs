use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SectPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectPosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SectPosts::Title).string().not_null())
                    .col(ColumnDef::new(SectPosts::Content).text().not_null())
                    .col(ColumnDef::new(SectPosts::Username).string().not_null())
                    .col(
                        ColumnDef::new(SectPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SectPosts::Likes)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(SectPosts::Likes).gte(0)),
                    )
                    .col(ColumnDef::new(SectPosts::Sect).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(SectPosts::Table)
                    .col(SectPosts::Sect)
                    .name("idx_sect_posts_sect")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SectPosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SectPosts {
    Table,
    Id,
    Title,
    Content,
    Username,
    CreatedAt,
    Likes,
    Sect,
}

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sects::Name).string().not_null().primary_key())
                    .col(ColumnDef::new(Sects::FoundedBy).uuid())
                    .col(
                        ColumnDef::new(Sects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Sects used to exist implicitly through their posts and members.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO sects (name)
                SELECT sect FROM sect_posts
                UNION
                SELECT sect FROM users WHERE sect IS NOT NULL
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sects {
    Table,
    Name,
    FoundedBy,
    CreatedAt,
}

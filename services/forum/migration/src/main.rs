use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(seekers_forum_migration::Migrator).await;
}

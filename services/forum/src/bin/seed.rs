//! Populate a forum database with sample users, posts, sect posts and sects.
//!
//! ```bash
//! cargo run -p seekers-forum --bin seed -- --database-url postgres://localhost/forum
//! ```

use anyhow::{Context as _, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

use seekers_core::tracing::init_tracing;
use seekers_forum::domain::repository::{PostRepository, SectRepository, UserRepository};
use seekers_forum::domain::types::{NewPost, Sect, User};
use seekers_forum::infra::db::{DbPostRepository, DbSectRepository, DbUserRepository};
use seekers_forum_migration::Migrator;

#[derive(Parser)]
#[command(about = "Seed the forum database with sample data")]
struct Args {
    /// PostgreSQL connection URL
    #[arg(long)]
    database_url: String,
}

struct SampleUser {
    username: &'static str,
    avatar_img: &'static str,
    avatar_frame: &'static str,
    member_since: (u32, u32, u32),
    sect: &'static str,
}

struct SamplePost {
    title: &'static str,
    content: &'static str,
    username: &'static str,
    created_at: (u32, u32, u32),
    likes: i64,
    sect: Option<&'static str>,
}

const USERS: &[SampleUser] = &[
    SampleUser {
        username: "Daoist Andy",
        avatar_img: "/images/profilePictures/pic1.jpeg",
        avatar_frame: "/images/profilePictures/frame2.png",
        member_since: (1, 12, 0),
        sect: "Doan Sect",
    },
    SampleUser {
        username: "Young Master Wilson",
        avatar_img: "/images/profilePictures/pic2.jpeg",
        avatar_frame: "/images/profilePictures/frame2.png",
        member_since: (2, 12, 0),
        sect: "Truong Sect",
    },
];

const POSTS: &[SamplePost] = &[
    SamplePost {
        title: "My Recent Musings",
        content: "This Daoist launched a technique at himself and became hurt, does that mean this Daoist is mighty or feeble?",
        username: "Daoist Andy",
        created_at: (1, 12, 30),
        likes: 0,
        sect: None,
    },
    SamplePost {
        title: "The Decreasing Quality of Daoists Nowadays...",
        content: "Upon reading Daoist Andy's post, this Senior didn't know whether to laugh or cry. Daoists these days are truly horrendous. Daoist Andy has eyes but cannot see Mount Tai...",
        username: "Young Master Wilson",
        created_at: (2, 12, 30),
        likes: 40,
        sect: None,
    },
    SamplePost {
        title: "Truong Sect",
        content: "I hate the Truong Sect",
        username: "Young Master Wilson",
        created_at: (1, 12, 30),
        likes: 0,
        sect: Some("Doan Sect"),
    },
    SamplePost {
        title: "Indeed",
        content: "I agree",
        username: "Young Master Wilson",
        created_at: (2, 12, 30),
        likes: 40,
        sect: Some("Doan Sect"),
    },
];

/// Sample timestamps all fall in January 2024.
fn january_2024((day, hour, minute): (u32, u32, u32)) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .context("invalid seed timestamp")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None).await.context("failed to run migrations")?;

    let users = DbUserRepository { db: db.clone() };
    let posts = DbPostRepository { db: db.clone() };
    let sects = DbSectRepository { db: db.clone() };

    if users.find_by_username(USERS[0].username).await?.is_some() {
        tracing::info!("database already seeded, nothing to do");
        db.close().await?;
        return Ok(());
    }

    for sample in USERS {
        let created_at = january_2024(sample.member_since)?;
        sects
            .create(&Sect {
                name: sample.sect.to_owned(),
                founded_by: None,
                created_at,
            })
            .await?;

        let mut user = User::new(sample.username.to_owned(), None);
        user.avatar_img = Some(sample.avatar_img.to_owned());
        user.avatar_frame = Some(sample.avatar_frame.to_owned());
        user.member_since = created_at;
        user.sect = Some(sample.sect.to_owned());
        users.create(&user).await?;
    }

    for sample in POSTS {
        posts
            .create(&NewPost {
                title: sample.title.to_owned(),
                content: sample.content.to_owned(),
                username: sample.username.to_owned(),
                created_at: january_2024(sample.created_at)?,
                likes: sample.likes,
                sect: sample.sect.map(str::to_owned),
            })
            .await?;
    }

    tracing::info!(
        users = USERS.len(),
        posts = POSTS.len(),
        "database populated with sample data"
    );
    db.close().await?;
    Ok(())
}

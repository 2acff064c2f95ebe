use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Provider tag mixed into identity hashes.
pub const GOOGLE_PROVIDER: &str = "google";

/// Forum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Keyed hash of the Google subject; `None` for local registrations.
    pub identity_hash: Option<String>,
    pub avatar_img: Option<String>,
    pub avatar_frame: Option<String>,
    pub member_since: DateTime<Utc>,
    pub sect: Option<String>,
}

impl User {
    pub fn new(username: String, identity_hash: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            identity_hash,
            avatar_img: None,
            avatar_frame: None,
            member_since: Utc::now(),
            sect: None,
        }
    }
}

/// A post in either the global feed (`sect == None`) or a sect feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub sect: Option<String>,
}

/// Insert payload for a post. `sect` selects the sect feed.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub sect: Option<String>,
}

/// Registered sect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sect {
    pub name: String,
    pub founded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of matching a provider login against stored users.
#[derive(Debug, Clone)]
pub enum IdentityResolution {
    Known(User),
    /// No user carries this identity yet; bind a username to it.
    Unknown { identity_hash: String },
}

/// Which avatar slot a profile update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSlot {
    Picture,
    Frame,
}

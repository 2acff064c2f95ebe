//! Feed scope and ordering.

use serde::{Deserialize, Serialize};

/// Display order of a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedOrder {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl FeedOrder {
    /// Parse the `sort` query parameter of the feed pages.
    ///
    /// `likes` and `oldest` are recognised; anything else, including an absent
    /// parameter, falls back to newest-first.
    pub fn from_query(sort: Option<&str>) -> Self {
        match sort {
            Some("likes") => Self::MostLiked,
            Some("oldest") => Self::Oldest,
            _ => Self::Newest,
        }
    }
}

/// Which physical collection a post id belongs to.
///
/// Global posts and sect posts live in separate tables with independent id
/// sequences, so an id alone does not identify a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCollection {
    Posts,
    SectPosts,
}

/// The set of posts a feed shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedScope {
    Global,
    Sect(String),
}

impl FeedScope {
    pub fn collection(&self) -> PostCollection {
        match self {
            Self::Global => PostCollection::Posts,
            Self::Sect(_) => PostCollection::SectPosts,
        }
    }

    pub fn sect(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Sect(name) => Some(name),
        }
    }
}

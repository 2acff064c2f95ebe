//! sea-orm entities for the forum tables.

pub mod posts;
pub mod sect_posts;
pub mod sects;
pub mod users;

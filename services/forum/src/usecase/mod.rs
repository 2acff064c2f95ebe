pub mod account;
pub mod feed;
pub mod identity;
pub mod profile;
pub mod sect;

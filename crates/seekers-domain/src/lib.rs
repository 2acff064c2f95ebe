//! Domain types shared across the forum crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod avatar;
pub mod feed;
pub mod sect;
pub mod user;

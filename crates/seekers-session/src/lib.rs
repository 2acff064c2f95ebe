//! Session and identity primitives for the forum.
//!
//! Provides the session cookie builders, the server-side session payload, and
//! the keyed identity hash used to re-identify returning provider logins.

pub mod cookie;
pub mod identity;
pub mod session;

//! Cross-cutting service plumbing: configuration loading, tracing setup,
//! health probes, request ids and shared serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;

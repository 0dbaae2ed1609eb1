//! HTTP and persistence plumbing shared by Bazaar services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod response;
pub mod sea_ext;
pub mod serde;
pub mod tracing;

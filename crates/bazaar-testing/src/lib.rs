//! Test utilities for Bazaar services.
//!
//! Import from tests only, never from production code.

pub mod auth;
pub mod http;

//! Auth types shared across Bazaar services.
//!
//! Provides JWT issuing/validation, the access-token cookie builders, and the
//! `IdentityHeaders` extractor.

pub mod cookie;
pub mod identity;
pub mod token;

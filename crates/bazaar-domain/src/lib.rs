//! Domain types shared across all Bazaar services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` maps database rows onto them.

pub mod auth_token;
pub mod choice;
pub mod pagination;
pub mod user;

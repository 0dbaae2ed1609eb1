//! sea-orm entities for the users service tables.

pub mod auth_tokens;
pub mod delivery_addresses;
pub mod staff_settings;
pub mod user_groups;
pub mod users;
pub mod wallets;

pub mod address;
pub mod auth;
pub mod staff;
pub mod user;
pub mod wallet;

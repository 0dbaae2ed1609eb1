pub mod address;
pub mod auth_token;
pub mod session;
pub mod staff;
pub mod user;
pub mod wallet;

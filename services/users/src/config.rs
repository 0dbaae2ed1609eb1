use serde::Deserialize;

use bazaar_core::config::Config;

use crate::domain::types::AUTH_TOKEN_TTL_SECS;

/// Users service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct UsersConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Domain the access-token cookie is scoped to. Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: String,
    /// TCP port for the HTTP server (default 3113). Env var: `USERS_PORT`.
    #[serde(default = "default_users_port")]
    pub users_port: u16,
    /// Lifetime of issued verification and login codes (default 600).
    #[serde(default = "default_auth_token_ttl_secs")]
    pub auth_token_ttl_secs: i64,
}

fn default_users_port() -> u16 {
    3113
}

fn default_auth_token_ttl_secs() -> i64 {
    AUTH_TOKEN_TTL_SECS
}

impl Config for UsersConfig {}

impl UsersConfig {
    pub fn auth_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.auth_token_ttl_secs)
    }
}

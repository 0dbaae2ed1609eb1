use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use bazaar_core::config::Config;
use bazaar_core::tracing::init_tracing;
use bazaar_users::config::UsersConfig;
use bazaar_users::router::build_router;
use bazaar_users::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = UsersConfig::from_env().expect("invalid configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db: Arc::new(db),
        jwt_secret: config.jwt_secret.clone(),
        cookie_domain: config.cookie_domain.clone(),
        auth_token_ttl: config.auth_token_ttl(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.users_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("users service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use bazaar_core::health::{healthz, readyz};
use bazaar_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    address::{create_address, delete_address, get_address, list_addresses, update_address},
    auth::{check_token, create_auth_code, create_token, revoke_token},
    staff::{
        add_user_to_group, create_staff_settings, get_staff_settings, get_user,
        list_staff_settings, list_users,
    },
    user::{confirm_mobile, get_me, get_my_staff_settings, register, update_me, verify_user},
    wallet::{create_wallet, get_wallet},
};
use crate::permission::require_staff;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let staff = Router::new()
        .route("/staff/users", get(list_users))
        .route("/staff/users/{id}", get(get_user))
        .route("/staff/users/{id}/groups/{group}", put(add_user_to_group))
        .route(
            "/staff/settings",
            get(list_staff_settings).post(create_staff_settings),
        )
        .route("/staff/settings/{id}", get(get_staff_settings))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(register))
        .route("/users/verification", post(confirm_mobile))
        .route("/users/verify", get(verify_user))
        .route("/users/@me", get(get_me).patch(update_me))
        .route("/users/@me/staff-settings", get(get_my_staff_settings))
        // Delivery addresses
        .route(
            "/users/@me/addresses",
            get(list_addresses).post(create_address),
        )
        .route(
            "/users/@me/addresses/{id}",
            get(get_address)
                .patch(update_address)
                .delete(delete_address),
        )
        // Wallet
        .route("/users/@me/wallet", get(get_wallet).post(create_wallet))
        // Session
        .route("/auth/code", post(create_auth_code))
        .route(
            "/auth/token",
            get(check_token).post(create_token).delete(revoke_token),
        )
        // Staff only
        .merge(staff)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

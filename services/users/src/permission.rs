//! Gate for staff-only routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use bazaar_auth_types::identity::IdentityHeaders;
use bazaar_domain::choice::ChoiceEnum;
use bazaar_domain::user::UserGroup;

use crate::domain::repository::GroupRepository;
use crate::error::UsersServiceError;
use crate::state::AppState;

/// Allow only members of the `staff` group.
pub async fn ensure_staff<G: GroupRepository>(
    groups: &G,
    user_id: Uuid,
) -> Result<(), UsersServiceError> {
    if groups.has_group(user_id, UserGroup::Staff.value()).await? {
        Ok(())
    } else {
        tracing::debug!(%user_id, "staff route refused");
        Err(UsersServiceError::Forbidden)
    }
}

/// Middleware for `from_fn_with_state`. A missing identity is 401, a non-staff caller 403.
pub async fn require_staff(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    request: Request,
    next: Next,
) -> Result<Response, UsersServiceError> {
    ensure_staff(&state.group_repo(), identity.user_id).await?;
    Ok(next.run(request).await)
}

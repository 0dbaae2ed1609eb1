use crate::domain::repository::TokenDispatchPort;
use crate::domain::types::{AuthToken, User};
use crate::error::UsersServiceError;

/// Writes issued codes to the debug log in place of an SMS gateway.
#[derive(Clone, Default)]
pub struct LogTokenDispatch;

impl TokenDispatchPort for LogTokenDispatch {
    async fn dispatch(&self, user: &User, token: &AuthToken) -> Result<(), UsersServiceError> {
        tracing::debug!(
            user_id = %user.id,
            mobile = %user.mobile,
            token_type = %token.token_type,
            code = %token.token,
            expiry = %token.expiry,
            "auth token ready for delivery"
        );
        Ok(())
    }
}

use chrono::{Duration, Utc};
use uuid::Uuid;

use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use bazaar_domain::choice::ChoiceEnum;

use crate::addon::{generate_unique, numeric_code};
use crate::domain::repository::{AuthTokenRepository, TokenDispatchPort, UniquenessPort};
use crate::domain::types::{
    AUTH_TOKEN_LEN, AuthToken, AuthTokenFilter, MAX_PENDING_TOKENS, UniqueField, User,
};
use crate::error::UsersServiceError;

// ── CreateAuthToken ──────────────────────────────────────────────────────────

/// Issues a pending numeric code and hands it to the dispatcher.
pub struct CreateAuthTokenUseCase<T, Q, D>
where
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub tokens: T,
    pub unique: Q,
    pub dispatch: D,
    pub ttl: Duration,
}

impl<T, Q, D> CreateAuthTokenUseCase<T, Q, D>
where
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub async fn execute(
        &self,
        user: &User,
        token_type: AuthTokenType,
    ) -> Result<AuthToken, UsersServiceError> {
        let now = Utc::now();
        let pending = self.tokens.count_pending(user.id, token_type, now).await?;
        if pending >= MAX_PENDING_TOKENS {
            return Err(UsersServiceError::TooManyAuthTokens);
        }

        let code = generate_unique(&self.unique, UniqueField::AuthTokenCode, || {
            numeric_code(AUTH_TOKEN_LEN)
        })
        .await?;
        let token = AuthToken {
            id: Uuid::now_v7(),
            user_id: user.id,
            token_type,
            token: code,
            status: AuthTokenStatus::default_member(),
            expiry: now + self.ttl,
            created_at: now,
            updated_at: now,
        };
        self.tokens.create(&token).await?;

        if let Err(e) = self.dispatch.dispatch(user, &token).await {
            // Undelivered codes must not count towards the pending limit.
            self.tokens
                .delete_first(&AuthTokenFilter {
                    user_id: Some(user.id),
                    token_type: Some(token_type),
                    token: Some(token.token.clone()),
                })
                .await?;
            return Err(e);
        }

        tracing::info!(user_id = %user.id, %token_type, "auth token issued");
        Ok(token)
    }
}

// ── DeleteAuthToken ──────────────────────────────────────────────────────────

pub struct DeleteAuthTokenUseCase<T: AuthTokenRepository> {
    pub tokens: T,
}

impl<T: AuthTokenRepository> DeleteAuthTokenUseCase<T> {
    /// Remove the newest token matching `filter`. A missing match is not an error.
    pub async fn execute(&self, filter: &AuthTokenFilter) -> Result<bool, UsersServiceError> {
        self.tokens.delete_first(filter).await
    }
}

// ── ConsumeAuthToken ─────────────────────────────────────────────────────────

pub struct ConsumeAuthTokenUseCase<T: AuthTokenRepository> {
    pub tokens: T,
}

impl<T: AuthTokenRepository> ConsumeAuthTokenUseCase<T> {
    /// Check the user's code for `token_type` and mark it used.
    pub async fn execute(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        code: &str,
    ) -> Result<AuthToken, UsersServiceError> {
        let mut token = self
            .tokens
            .find_latest(user_id, token_type, code)
            .await?
            .ok_or(UsersServiceError::InvalidAuthToken)?;

        let now = Utc::now();
        if token.status != AuthTokenStatus::Pending || token.is_expired(now) {
            return Err(UsersServiceError::InvalidAuthToken);
        }
        if !AuthTokenStatus::is_valid_transition(token.status, AuthTokenStatus::Used) {
            return Err(UsersServiceError::InvalidAuthToken);
        }

        self.tokens.set_status(token.id, AuthTokenStatus::Used).await?;
        token.status = AuthTokenStatus::Used;
        token.updated_at = now;
        Ok(token)
    }
}

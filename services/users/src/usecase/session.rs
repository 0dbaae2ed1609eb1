use bazaar_auth_types::token::issue_access_token;
use bazaar_domain::auth_token::AuthTokenType;

use crate::domain::repository::{
    AuthTokenRepository, GroupRepository, TokenDispatchPort, UniquenessPort, UserRepository,
};
use crate::domain::types::{AuthToken, Profile, UserLookup};
use crate::error::UsersServiceError;
use crate::usecase::auth_token::{ConsumeAuthTokenUseCase, CreateAuthTokenUseCase};

// ── RequestLoginCode ─────────────────────────────────────────────────────────

pub struct RequestLoginCodeUseCase<U, T, Q, D>
where
    U: UserRepository,
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub users: U,
    pub issuer: CreateAuthTokenUseCase<T, Q, D>,
}

impl<U, T, Q, D> RequestLoginCodeUseCase<U, T, Q, D>
where
    U: UserRepository,
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub async fn execute(&self, mobile: &str) -> Result<AuthToken, UsersServiceError> {
        let user = self
            .users
            .find(&UserLookup::Mobile(mobile.to_owned()))
            .await?
            .filter(|user| user.is_active)
            .ok_or(UsersServiceError::UserNotFound)?;
        self.issuer.execute(&user, AuthTokenType::LoginToken).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginOutput {
    pub profile: Profile,
    pub access_token: String,
    pub access_token_exp: u64,
}

/// Exchanges a login code for a signed access token.
pub struct LoginUseCase<U, G, T>
where
    U: UserRepository,
    G: GroupRepository,
    T: AuthTokenRepository,
{
    pub users: U,
    pub groups: G,
    pub tokens: ConsumeAuthTokenUseCase<T>,
    pub jwt_secret: String,
}

impl<U, G, T> LoginUseCase<U, G, T>
where
    U: UserRepository,
    G: GroupRepository,
    T: AuthTokenRepository,
{
    pub async fn execute(&self, mobile: &str, code: &str) -> Result<LoginOutput, UsersServiceError> {
        let mut user = self
            .users
            .find(&UserLookup::Mobile(mobile.to_owned()))
            .await?
            .filter(|user| user.is_active)
            .ok_or(UsersServiceError::UserNotFound)?;

        self.tokens
            .execute(user.id, AuthTokenType::LoginToken, code)
            .await?;

        if user.first_login {
            user.first_login = false;
            user = self.users.update(&user).await?;
        }

        let groups = self.groups.list_names(user.id).await?;
        let (access_token, access_token_exp) =
            issue_access_token(user.id, groups.clone(), &self.jwt_secret)
                .map_err(|e| UsersServiceError::Internal(e.into()))?;
        tracing::info!(user_id = %user.id, "access token issued");

        Ok(LoginOutput {
            profile: Profile { user, groups },
            access_token,
            access_token_exp,
        })
    }
}

use chrono::Utc;
use uuid::Uuid;

use bazaar_domain::auth_token::AuthTokenType;
use bazaar_domain::choice::ChoiceEnum;
use bazaar_domain::pagination::{ListQuery, Page};
use bazaar_domain::user::{GenderType, MaritalType, UserGroup, UserType};

use crate::addon::{alphanumeric_code, generate_unique};
use crate::domain::repository::{
    AuthTokenRepository, GroupRepository, TokenDispatchPort, UniquenessPort, UserRepository,
};
use crate::domain::types::{
    Profile, REFERRAL_CODE_LEN, UniqueField, User, UserLookup, UserPatch,
};
use crate::error::UsersServiceError;
use crate::usecase::auth_token::{ConsumeAuthTokenUseCase, CreateAuthTokenUseCase};

// ── VerifyUser ───────────────────────────────────────────────────────────────

pub struct VerifyUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> VerifyUserUseCase<U> {
    /// Whether a user matching `lookup` exists.
    pub async fn execute(&self, lookup: &UserLookup) -> Result<bool, UsersServiceError> {
        self.users.exists(lookup).await
    }
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub mobile: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub gender: Option<GenderType>,
    pub marital_status: Option<MaritalType>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: String,
    pub newsletter: bool,
}

/// Creates the account and sends a number-verification code.
pub struct RegisterUserUseCase<U, T, Q, D>
where
    U: UserRepository,
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub users: U,
    pub unique: Q,
    pub issuer: CreateAuthTokenUseCase<T, Q, D>,
}

impl<U, T, Q, D> RegisterUserUseCase<U, T, Q, D>
where
    U: UserRepository,
    T: AuthTokenRepository,
    Q: UniquenessPort,
    D: TokenDispatchPort,
{
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, UsersServiceError> {
        // Staff accounts are created through the staff settings flow.
        if input.user_type == UserType::Staff {
            return Err(UsersServiceError::Forbidden);
        }

        let username = input.username.unwrap_or_else(|| input.mobile.clone());
        let mut lookups = vec![
            UserLookup::Mobile(input.mobile.clone()),
            UserLookup::Username(username.clone()),
        ];
        if let Some(ref email) = input.email {
            lookups.push(UserLookup::Email(email.clone()));
        }
        for lookup in &lookups {
            if self.users.exists(lookup).await? {
                return Err(UsersServiceError::UserAlreadyExists);
            }
        }

        let referral_code = generate_unique(&self.unique, UniqueField::ReferralCode, || {
            alphanumeric_code(REFERRAL_CODE_LEN)
        })
        .await?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            username,
            first_name: input.first_name,
            last_name: input.last_name,
            user_type: input.user_type,
            mobile: input.mobile,
            email: input.email,
            state: input.state,
            city: input.city,
            zip_code: input.zip_code,
            town: input.town,
            address: input.address,
            gender: input.gender,
            marital_status: input.marital_status,
            newsletter: input.newsletter,
            is_confirmed: false,
            first_login: true,
            is_active: true,
            secret_key: None,
            public_key: None,
            referral_code: Some(referral_code),
            date_joined: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        // An account is only kept once its verification code is out.
        if let Err(err) = self
            .issuer
            .execute(&user, AuthTokenType::NumberVerification)
            .await
        {
            tracing::warn!(user_id = %user.id, error = %err, "verification code not issued, removing account");
            self.users.delete(user.id).await?;
            return Err(err);
        }
        tracing::info!(user_id = %user.id, user_type = %user.user_type, "user registered");
        Ok(user)
    }
}

// ── ConfirmMobile ────────────────────────────────────────────────────────────

pub struct ConfirmMobileUseCase<U: UserRepository, T: AuthTokenRepository> {
    pub users: U,
    pub tokens: ConsumeAuthTokenUseCase<T>,
}

impl<U: UserRepository, T: AuthTokenRepository> ConfirmMobileUseCase<U, T> {
    pub async fn execute(&self, mobile: &str, code: &str) -> Result<User, UsersServiceError> {
        let mut user = self
            .users
            .find(&UserLookup::Mobile(mobile.to_owned()))
            .await?
            .ok_or(UsersServiceError::UserNotFound)?;

        self.tokens
            .execute(user.id, AuthTokenType::NumberVerification, code)
            .await?;

        if user.is_confirmed {
            return Ok(user);
        }
        user.is_confirmed = true;
        let user = self.users.update(&user).await?;
        tracing::info!(user_id = %user.id, "mobile number confirmed");
        Ok(user)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository, G: GroupRepository> {
    pub users: U,
    pub groups: G,
}

impl<U: UserRepository, G: GroupRepository> GetProfileUseCase<U, G> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, UsersServiceError> {
        let user = self
            .users
            .find(&UserLookup::Id(user_id))
            .await?
            .ok_or(UsersServiceError::UserNotFound)?;
        let groups = self.groups.list_names(user_id).await?;
        Ok(Profile { user, groups })
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<U: UserRepository, G: GroupRepository> {
    pub users: U,
    pub groups: G,
}

impl<U: UserRepository, G: GroupRepository> UpdateProfileUseCase<U, G> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        patch: UserPatch,
    ) -> Result<Profile, UsersServiceError> {
        if patch.is_empty() {
            return Err(UsersServiceError::MissingData);
        }
        let mut user = self
            .users
            .find(&UserLookup::Id(user_id))
            .await?
            .ok_or(UsersServiceError::UserNotFound)?;
        user.apply(patch);
        let user = self.users.update(&user).await?;
        let groups = self.groups.list_names(user_id).await?;
        Ok(Profile { user, groups })
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self, query: &ListQuery) -> Result<Page<User>, UsersServiceError> {
        self.users.list(query).await
    }
}

// ── AddUserToGroup ───────────────────────────────────────────────────────────

pub struct AddUserToGroupUseCase<U: UserRepository, G: GroupRepository> {
    pub users: U,
    pub groups: G,
}

impl<U: UserRepository, G: GroupRepository> AddUserToGroupUseCase<U, G> {
    /// Returns `false` when the user already belonged to the group.
    pub async fn execute(&self, user_id: Uuid, group: UserGroup) -> Result<bool, UsersServiceError> {
        if !self.users.exists(&UserLookup::Id(user_id)).await? {
            return Err(UsersServiceError::UserNotFound);
        }
        let added = self.groups.add(user_id, group.value()).await?;
        if added {
            tracing::info!(%user_id, group = group.value(), "user added to group");
        }
        Ok(added)
    }
}

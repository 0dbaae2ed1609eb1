#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use bazaar_domain::pagination::{ListQuery, Page};

use crate::domain::types::{
    AuthToken, AuthTokenFilter, DeliveryAddress, NewDeliveryAddress, StaffSettings, UniqueField,
    User, UserLookup, Wallet,
};
use crate::error::UsersServiceError;

pub trait UserRepository: Send + Sync {
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, UsersServiceError>;

    /// Whether a user matching `lookup` exists.
    async fn exists(&self, lookup: &UserLookup) -> Result<bool, UsersServiceError>;

    /// Fails with `UserAlreadyExists` when mobile, username or email is taken.
    async fn create(&self, user: &User) -> Result<(), UsersServiceError>;

    /// Persist every mutable field of `user`, bumping `updated_at`.
    async fn update(&self, user: &User) -> Result<User, UsersServiceError>;

    /// Remove the account together with everything that references it.
    async fn delete(&self, id: Uuid) -> Result<(), UsersServiceError>;

    async fn list(&self, query: &ListQuery) -> Result<Page<User>, UsersServiceError>;
}

/// Named permission-group memberships.
pub trait GroupRepository: Send + Sync {
    /// Group names of a user, oldest membership first.
    async fn list_names(&self, user_id: Uuid) -> Result<Vec<String>, UsersServiceError>;

    async fn has_group(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError>;

    /// Add a membership. Returns `false` when it already existed.
    async fn add(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError>;
}

pub trait AuthTokenRepository: Send + Sync {
    async fn create(&self, token: &AuthToken) -> Result<(), UsersServiceError>;

    /// Pending tokens of `token_type` for the user that expire after `now`.
    async fn count_pending(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        now: DateTime<Utc>,
    ) -> Result<u64, UsersServiceError>;

    /// Newest token of the user matching type and code, whatever its status.
    async fn find_latest(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        token: &str,
    ) -> Result<Option<AuthToken>, UsersServiceError>;

    async fn set_status(&self, id: Uuid, status: AuthTokenStatus)
    -> Result<(), UsersServiceError>;

    /// Delete the newest token matching `filter`. Returns `false` when none matched.
    async fn delete_first(&self, filter: &AuthTokenFilter) -> Result<bool, UsersServiceError>;
}

pub trait StaffSettingsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffSettings>, UsersServiceError>;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffSettings>, UsersServiceError>;

    /// Store the profile, switch its owner to `STAFF` and grant the staff group,
    /// all or nothing. Fails with `StaffSettingsAlreadyExists` when the owner has one.
    async fn enroll(&self, settings: &StaffSettings) -> Result<(), UsersServiceError>;

    async fn list(&self, query: &ListQuery) -> Result<Page<StaffSettings>, UsersServiceError>;
}

pub trait DeliveryAddressRepository: Send + Sync {
    async fn list(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<Page<DeliveryAddress>, UsersServiceError>;

    async fn find(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<DeliveryAddress>, UsersServiceError>;

    async fn create(
        &self,
        address: &NewDeliveryAddress,
    ) -> Result<DeliveryAddress, UsersServiceError>;

    async fn update(&self, address: &DeliveryAddress) -> Result<(), UsersServiceError>;

    /// Returns `false` when the user owns no address with this id.
    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, UsersServiceError>;
}

pub trait WalletRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Wallet>, UsersServiceError>;

    /// Fails with `WalletAlreadyExists` when the user already has one.
    async fn create(&self, wallet: &Wallet) -> Result<(), UsersServiceError>;
}

/// Collision checks for generated identifiers.
pub trait UniquenessPort: Send + Sync {
    async fn is_taken(&self, field: UniqueField, value: &str) -> Result<bool, UsersServiceError>;
}

/// Hands an issued code to the user out of band.
pub trait TokenDispatchPort: Send + Sync {
    async fn dispatch(&self, user: &User, token: &AuthToken) -> Result<(), UsersServiceError>;
}

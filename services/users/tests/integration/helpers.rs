#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use bazaar_domain::pagination::{ListQuery, Page};
use bazaar_domain::user::UserType;

use bazaar_users::domain::repository::{
    AuthTokenRepository, DeliveryAddressRepository, GroupRepository, StaffSettingsRepository,
    TokenDispatchPort, UniquenessPort, UserRepository, WalletRepository,
};
use bazaar_users::domain::types::{
    AuthToken, AuthTokenFilter, DeliveryAddress, NewDeliveryAddress, StaffSettings, UniqueField,
    User, UserLookup, Wallet,
};
use bazaar_users::error::UsersServiceError;
use bazaar_users::usecase::auth_token::{ConsumeAuthTokenUseCase, CreateAuthTokenUseCase};

pub const JWT_SECRET: &str = "integration-test-secret";

pub fn test_user() -> User {
    test_user_with_mobile("08012345678")
}

pub fn test_user_with_mobile(mobile: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        username: mobile.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        user_type: UserType::Customer,
        mobile: mobile.to_owned(),
        email: Some(format!("{mobile}@example.com")),
        state: None,
        city: None,
        zip_code: None,
        town: None,
        address: String::new(),
        gender: None,
        marital_status: None,
        newsletter: true,
        is_confirmed: false,
        first_login: true,
        is_active: true,
        secret_key: None,
        public_key: None,
        referral_code: Some("abc123".to_owned()),
        date_joined: now,
        updated_at: now,
    }
}

pub fn pending_token(user_id: Uuid, token_type: AuthTokenType, code: &str) -> AuthToken {
    let now = Utc::now();
    AuthToken {
        id: Uuid::now_v7(),
        user_id,
        token_type,
        token: code.to_owned(),
        status: AuthTokenStatus::Pending,
        expiry: now + Duration::seconds(600),
        created_at: now,
        updated_at: now,
    }
}

fn page_of<T: Clone>(items: Vec<T>, query: &ListQuery) -> Page<T> {
    let per_page = query.page.per_page as usize;
    let skip = (query.page.page as usize - 1) * per_page;
    Page {
        count: items.len() as u64,
        page: query.page.page,
        per_page: query.page.per_page,
        results: items.into_iter().skip(skip).take(per_page).collect(),
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

fn matches(user: &User, lookup: &UserLookup) -> bool {
    match lookup {
        UserLookup::Id(id) => user.id == *id,
        UserLookup::Mobile(mobile) => user.mobile == *mobile,
        UserLookup::Email(email) => user.email.as_deref() == Some(email.as_str()),
        UserLookup::Username(username) => user.username == *username,
    }
}

impl UserRepository for MockUserRepo {
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, UsersServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| matches(u, lookup))
            .cloned())
    }

    async fn exists(&self, lookup: &UserLookup) -> Result<bool, UsersServiceError> {
        Ok(self.users.lock().unwrap().iter().any(|u| matches(u, lookup)))
    }

    async fn create(&self, user: &User) -> Result<(), UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        let clash = users.iter().any(|u| {
            u.mobile == user.mobile
                || u.username == user.username
                || (u.email.is_some() && u.email == user.email)
        });
        if clash {
            return Err(UsersServiceError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<User, UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UsersServiceError::UserNotFound)?;
        *stored = user.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), UsersServiceError> {
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<User>, UsersServiceError> {
        let users = self.users.lock().unwrap().clone();
        Ok(page_of(users, query))
    }
}

// ── MockGroupRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockGroupRepo {
    pub memberships: Arc<Mutex<Vec<(Uuid, String)>>>,
}

impl MockGroupRepo {
    pub fn new(memberships: Vec<(Uuid, &str)>) -> Self {
        Self {
            memberships: Arc::new(Mutex::new(
                memberships
                    .into_iter()
                    .map(|(id, name)| (id, name.to_owned()))
                    .collect(),
            )),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn memberships_handle(&self) -> Arc<Mutex<Vec<(Uuid, String)>>> {
        Arc::clone(&self.memberships)
    }
}

impl GroupRepository for MockGroupRepo {
    async fn list_names(&self, user_id: Uuid) -> Result<Vec<String>, UsersServiceError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, name)| name.clone())
            .collect())
    }

    async fn has_group(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .any(|(id, n)| *id == user_id && n == name))
    }

    async fn add(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError> {
        let mut memberships = self.memberships.lock().unwrap();
        if memberships.iter().any(|(id, n)| *id == user_id && n == name) {
            return Ok(false);
        }
        memberships.push((user_id, name.to_owned()));
        Ok(true)
    }
}

// ── MockTokenRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTokenRepo {
    pub tokens: Arc<Mutex<Vec<AuthToken>>>,
}

impl MockTokenRepo {
    pub fn new(tokens: Vec<AuthToken>) -> Self {
        Self {
            tokens: Arc::new(Mutex::new(tokens)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a shared handle to the internal token list for post-execution inspection.
    pub fn tokens_handle(&self) -> Arc<Mutex<Vec<AuthToken>>> {
        Arc::clone(&self.tokens)
    }
}

impl AuthTokenRepository for MockTokenRepo {
    async fn create(&self, token: &AuthToken) -> Result<(), UsersServiceError> {
        self.tokens.lock().unwrap().push(token.clone());
        Ok(())
    }

    async fn count_pending(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        now: DateTime<Utc>,
    ) -> Result<u64, UsersServiceError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.token_type == token_type
                    && t.status == AuthTokenStatus::Pending
                    && !t.is_expired(now)
            })
            .count() as u64)
    }

    async fn find_latest(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        token: &str,
    ) -> Result<Option<AuthToken>, UsersServiceError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.token_type == token_type && t.token == token)
            .max_by_key(|t| t.created_at)
            .cloned())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: AuthTokenStatus,
    ) -> Result<(), UsersServiceError> {
        if let Some(t) = self.tokens.lock().unwrap().iter_mut().find(|t| t.id == id) {
            t.status = status;
            t.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_first(&self, filter: &AuthTokenFilter) -> Result<bool, UsersServiceError> {
        let mut tokens = self.tokens.lock().unwrap();
        let position = tokens.iter().rposition(|t| {
            filter.user_id.is_none_or(|id| t.user_id == id)
                && filter.token_type.is_none_or(|ty| t.token_type == ty)
                && filter.token.as_deref().is_none_or(|code| t.token == code)
        });
        Ok(position.map(|i| tokens.remove(i)).is_some())
    }
}

// ── MockStaffRepo ────────────────────────────────────────────────────────────

/// Enrollment touches the shared user and membership lists, or nothing when `fail` is set.
#[derive(Clone, Default)]
pub struct MockStaffRepo {
    pub settings: Arc<Mutex<Vec<StaffSettings>>>,
    pub users: Arc<Mutex<Vec<User>>>,
    pub memberships: Arc<Mutex<Vec<(Uuid, String)>>>,
    pub fail: bool,
}

impl MockStaffRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn enrolling(users: &MockUserRepo, groups: &MockGroupRepo) -> Self {
        Self {
            users: users.users_handle(),
            memberships: groups.memberships_handle(),
            ..Self::default()
        }
    }

    pub fn failing(users: &MockUserRepo, groups: &MockGroupRepo) -> Self {
        Self {
            fail: true,
            ..Self::enrolling(users, groups)
        }
    }

    pub fn settings_handle(&self) -> Arc<Mutex<Vec<StaffSettings>>> {
        Arc::clone(&self.settings)
    }
}

impl StaffSettingsRepository for MockStaffRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffSettings>, UsersServiceError> {
        Ok(self
            .settings
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffSettings>, UsersServiceError> {
        Ok(self
            .settings
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn enroll(&self, settings: &StaffSettings) -> Result<(), UsersServiceError> {
        if self.fail {
            return Err(UsersServiceError::Internal(anyhow::anyhow!("update failed")));
        }
        let mut stored = self.settings.lock().unwrap();
        if stored.iter().any(|s| s.user_id == settings.user_id) {
            return Err(UsersServiceError::StaffSettingsAlreadyExists);
        }
        stored.push(settings.clone());
        if let Some(user) = self
            .users
            .lock()
            .unwrap()
            .iter_mut()
            .find(|u| u.id == settings.user_id)
        {
            user.user_type = UserType::Staff;
        }
        let mut memberships = self.memberships.lock().unwrap();
        if !memberships
            .iter()
            .any(|(id, name)| *id == settings.user_id && name == "staff")
        {
            memberships.push((settings.user_id, "staff".to_owned()));
        }
        Ok(())
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<StaffSettings>, UsersServiceError> {
        let settings = self.settings.lock().unwrap().clone();
        Ok(page_of(settings, query))
    }
}

// ── MockAddressRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAddressRepo {
    pub addresses: Arc<Mutex<Vec<DeliveryAddress>>>,
}

impl MockAddressRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn addresses_handle(&self) -> Arc<Mutex<Vec<DeliveryAddress>>> {
        Arc::clone(&self.addresses)
    }
}

impl DeliveryAddressRepository for MockAddressRepo {
    async fn list(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<Page<DeliveryAddress>, UsersServiceError> {
        let mut owned: Vec<_> = self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|a| std::cmp::Reverse(a.id));
        Ok(page_of(owned, query))
    }

    async fn find(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<DeliveryAddress>, UsersServiceError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.user_id == user_id)
            .cloned())
    }

    async fn create(
        &self,
        address: &NewDeliveryAddress,
    ) -> Result<DeliveryAddress, UsersServiceError> {
        let mut addresses = self.addresses.lock().unwrap();
        let id = addresses.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let created = DeliveryAddress {
            id,
            user_id: address.user_id,
            location_name: address.location_name.clone(),
            address: address.address.clone(),
            zip_code: address.zip_code.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            phone_number: address.phone_number.clone(),
            is_default_address: address.is_default_address,
        };
        addresses.push(created.clone());
        Ok(created)
    }

    async fn update(&self, address: &DeliveryAddress) -> Result<(), UsersServiceError> {
        let mut addresses = self.addresses.lock().unwrap();
        if let Some(stored) = addresses.iter_mut().find(|a| a.id == address.id) {
            *stored = address.clone();
        }
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, UsersServiceError> {
        let mut addresses = self.addresses.lock().unwrap();
        let before = addresses.len();
        addresses.retain(|a| !(a.id == id && a.user_id == user_id));
        Ok(addresses.len() < before)
    }
}

// ── MockWalletRepo ───────────────────────────────────────────────────────────

/// With `stale_reads` set, lookups miss wallets a concurrent request already stored.
#[derive(Clone, Default)]
pub struct MockWalletRepo {
    pub wallets: Arc<Mutex<Vec<Wallet>>>,
    pub stale_reads: bool,
}

impl MockWalletRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stale() -> Self {
        Self {
            stale_reads: true,
            ..Self::default()
        }
    }

    pub fn wallets_handle(&self) -> Arc<Mutex<Vec<Wallet>>> {
        Arc::clone(&self.wallets)
    }
}

impl WalletRepository for MockWalletRepo {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Wallet>, UsersServiceError> {
        if self.stale_reads {
            return Ok(None);
        }
        Ok(self
            .wallets
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.user_id == user_id)
            .cloned())
    }

    async fn create(&self, wallet: &Wallet) -> Result<(), UsersServiceError> {
        let mut wallets = self.wallets.lock().unwrap();
        if wallets.iter().any(|w| w.user_id == wallet.user_id) {
            return Err(UsersServiceError::WalletAlreadyExists);
        }
        wallets.push(wallet.clone());
        Ok(())
    }
}

// ── MockUniqueness ───────────────────────────────────────────────────────────

/// Reports the listed values as taken and records every candidate checked.
#[derive(Clone, Default)]
pub struct MockUniqueness {
    pub taken: Vec<String>,
    pub checked: Arc<Mutex<Vec<(UniqueField, String)>>>,
}

impl MockUniqueness {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn taken(values: &[&str]) -> Self {
        Self {
            taken: values.iter().map(|v| (*v).to_owned()).collect(),
            ..Self::default()
        }
    }

    pub fn checked_handle(&self) -> Arc<Mutex<Vec<(UniqueField, String)>>> {
        Arc::clone(&self.checked)
    }
}

impl UniquenessPort for MockUniqueness {
    async fn is_taken(&self, field: UniqueField, value: &str) -> Result<bool, UsersServiceError> {
        self.checked.lock().unwrap().push((field, value.to_owned()));
        Ok(self.taken.iter().any(|t| t == value))
    }
}

// ── MockDispatch ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDispatch {
    pub fail: bool,
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockDispatch {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(mobile, code)` pairs handed to the dispatcher.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl TokenDispatchPort for MockDispatch {
    async fn dispatch(&self, user: &User, token: &AuthToken) -> Result<(), UsersServiceError> {
        if self.fail {
            return Err(UsersServiceError::Internal(anyhow::anyhow!("sms gateway down")));
        }
        self.sent
            .lock()
            .unwrap()
            .push((user.mobile.clone(), token.token.clone()));
        Ok(())
    }
}

pub fn issuer(
    tokens: MockTokenRepo,
    dispatch: MockDispatch,
) -> CreateAuthTokenUseCase<MockTokenRepo, MockUniqueness, MockDispatch> {
    CreateAuthTokenUseCase {
        tokens,
        unique: MockUniqueness::free(),
        dispatch,
        ttl: Duration::seconds(600),
    }
}

pub fn consumer(tokens: MockTokenRepo) -> ConsumeAuthTokenUseCase<MockTokenRepo> {
    ConsumeAuthTokenUseCase { tokens }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use bazaar_domain::user::{
    DEFAULT_GROUP_NAME, DisabilityType, GenderType, MaritalType, StaffType, UserType,
};

/// Seconds an issued auth token stays usable.
pub const AUTH_TOKEN_TTL_SECS: i64 = 600;
/// Pending, unexpired tokens of one type a user may hold at once.
pub const MAX_PENDING_TOKENS: u64 = 5;
/// Digits in an auth token code.
pub const AUTH_TOKEN_LEN: usize = 6;
pub const REFERRAL_CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub mobile: String,
    pub email: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: String,
    pub gender: Option<GenderType>,
    pub marital_status: Option<MaritalType>,
    pub newsletter: bool,
    pub is_confirmed: bool,
    pub first_login: bool,
    pub is_active: bool,
    pub secret_key: Option<String>,
    pub public_key: Option<String>,
    pub referral_code: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Overwrite the fields present in `patch`.
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch {
            first_name,
            last_name,
            email,
            state,
            city,
            zip_code,
            town,
            address,
            gender,
            marital_status,
            newsletter,
        } = patch;
        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if email.is_some() {
            self.email = email;
        }
        if state.is_some() {
            self.state = state;
        }
        if city.is_some() {
            self.city = city;
        }
        if zip_code.is_some() {
            self.zip_code = zip_code;
        }
        if town.is_some() {
            self.town = town;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if gender.is_some() {
            self.gender = gender;
        }
        if marital_status.is_some() {
            self.marital_status = marital_status;
        }
        if let Some(v) = newsletter {
            self.newsletter = v;
        }
    }
}

/// Group reported for a user: the first membership, or `customer` when there is none.
pub fn primary_group(groups: &[String]) -> &str {
    groups.first().map_or(DEFAULT_GROUP_NAME, String::as_str)
}

/// A user together with their group memberships.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub groups: Vec<String>,
}

impl Profile {
    pub fn group(&self) -> &str {
        primary_group(&self.groups)
    }
}

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: Option<String>,
    pub gender: Option<GenderType>,
    pub marital_status: Option<MaritalType>,
    pub newsletter: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.state.is_none()
            && self.city.is_none()
            && self.zip_code.is_none()
            && self.town.is_none()
            && self.address.is_none()
            && self.gender.is_none()
            && self.marital_status.is_none()
            && self.newsletter.is_none()
    }
}

/// Ways to identify a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(Uuid),
    Mobile(String),
    Email(String),
    Username(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_type: AuthTokenType,
    pub token: String,
    pub status: AuthTokenStatus,
    pub expiry: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}

/// Narrows which tokens a delete applies to. Unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct AuthTokenFilter {
    pub user_id: Option<Uuid>,
    pub token_type: Option<AuthTokenType>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffSettings {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Option<StaffType>,
    pub staff_name: Option<String>,
    pub staff_type: Option<StaffType>,
    pub state: Option<String>,
    pub local_govt: Option<String>,
    pub address: String,
    pub disability: Option<DisabilityType>,
    pub image: Option<String>,
    pub bank: BankDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankDetails {
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryAddress {
    pub id: i32,
    pub user_id: Uuid,
    pub location_name: String,
    pub address: String,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone_number: Option<String>,
    pub is_default_address: bool,
}

/// Address fields before the database assigns an id.
#[derive(Debug, Clone)]
pub struct NewDeliveryAddress {
    pub user_id: Uuid,
    pub location_name: String,
    pub address: String,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone_number: Option<String>,
    pub is_default_address: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryAddressPatch {
    pub location_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone_number: Option<String>,
    pub is_default_address: Option<bool>,
}

impl DeliveryAddress {
    pub fn apply(&mut self, patch: DeliveryAddressPatch) {
        if let Some(v) = patch.location_name {
            self.location_name = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
        if patch.zip_code.is_some() {
            self.zip_code = patch.zip_code;
        }
        if patch.city.is_some() {
            self.city = patch.city;
        }
        if patch.state.is_some() {
            self.state = patch.state;
        }
        if patch.phone_number.is_some() {
            self.phone_number = patch.phone_number;
        }
        if let Some(v) = patch.is_default_address {
            self.is_default_address = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub id: Uuid,
    pub identifier: String,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub ledger_balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns whose generated values must not collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    AuthTokenCode,
    ReferralCode,
    WalletIdentifier,
}

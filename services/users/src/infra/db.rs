use std::borrow::Borrow;
use std::fmt::Display;
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, Insert, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionError, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use bazaar_core::sea_ext::{ApplyListQuery, ListFields, exists, fetch_page};
use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use bazaar_domain::choice::ChoiceEnum;
use bazaar_domain::pagination::{ListQuery, Page};
use bazaar_domain::user::{
    DisabilityType, GenderType, MaritalType, StaffType, UserGroup, UserType,
};
use bazaar_users_schema::{
    auth_tokens, delivery_addresses, staff_settings, user_groups, users, wallets,
};

use crate::domain::repository::{
    AuthTokenRepository, DeliveryAddressRepository, GroupRepository, StaffSettingsRepository,
    UniquenessPort, UserRepository, WalletRepository,
};
use crate::domain::types::{
    AuthToken, AuthTokenFilter, BankDetails, DeliveryAddress, NewDeliveryAddress, StaffSettings,
    UniqueField, User, UserLookup, Wallet,
};
use crate::error::UsersServiceError;

/// Decode a stored choice value. The column CHECK makes a miss an internal error.
fn stored<E, Q>(field: &'static str, value: &Q) -> Result<E, UsersServiceError>
where
    E: ChoiceEnum,
    E::Value: Borrow<Q>,
    Q: ?Sized + PartialEq + Display,
{
    E::parse(field, value)
        .map_err(|e| UsersServiceError::Internal(anyhow::Error::new(e).context("stored choice")))
}

fn stored_opt<E>(field: &'static str, value: Option<&str>) -> Result<Option<E>, UsersServiceError>
where
    E: ChoiceEnum<Value = &'static str>,
{
    value.map(|v| stored::<E, str>(field, v)).transpose()
}

/// A unique-constraint hit on write means a concurrent request got there first.
fn write_error(err: DbErr, conflict: UsersServiceError, context: &'static str) -> UsersServiceError {
    classify_write(err.sql_err(), err, conflict, context)
}

fn classify_write(
    sql_err: Option<SqlErr>,
    err: DbErr,
    conflict: UsersServiceError,
    context: &'static str,
) -> UsersServiceError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => UsersServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

fn transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

/// Insert of a group membership that leaves an existing one untouched.
fn membership(user_id: Uuid, name: &str, now: DateTime<Utc>) -> Insert<user_groups::ActiveModel> {
    user_groups::Entity::insert(user_groups::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_owned()),
        created_at: Set(now),
    })
    .on_conflict(
        OnConflict::columns([user_groups::Column::UserId, user_groups::Column::Name])
            .do_nothing()
            .to_owned(),
    )
}

fn try_page<T, U>(
    page: Page<T>,
    f: impl FnMut(T) -> Result<U, UsersServiceError>,
) -> Result<Page<U>, UsersServiceError> {
    let results = page.results.into_iter().map(f).collect::<Result<_, _>>()?;
    Ok(Page {
        count: page.count,
        page: page.page,
        per_page: page.per_page,
        results,
    })
}

// ── User repository ──────────────────────────────────────────────────────────

const USER_FIELDS: ListFields<users::Entity> = ListFields {
    search: &[
        users::Column::Mobile,
        users::Column::Username,
        users::Column::Email,
        users::Column::FirstName,
        users::Column::LastName,
    ],
    filter: &[
        users::Column::UserType,
        users::Column::IsActive,
        users::Column::IsConfirmed,
        users::Column::Gender,
        users::Column::MaritalStatus,
        users::Column::State,
        users::Column::City,
    ],
    ordering: &[
        users::Column::DateJoined,
        users::Column::FirstName,
        users::Column::LastName,
        users::Column::Mobile,
    ],
    primary_key: users::Column::Id,
};

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

fn user_condition(lookup: &UserLookup) -> Condition {
    let expr = match lookup {
        UserLookup::Id(id) => users::Column::Id.eq(*id),
        UserLookup::Mobile(mobile) => users::Column::Mobile.eq(mobile.as_str()),
        UserLookup::Email(email) => users::Column::Email.eq(email.as_str()),
        UserLookup::Username(username) => users::Column::Username.eq(username.as_str()),
    };
    Condition::all().add(expr)
}

impl UserRepository for DbUserRepository {
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .filter(user_condition(lookup))
            .one(self.db.as_ref())
            .await
            .context("find user")?;
        model.map(user_from_model).transpose()
    }

    async fn exists(&self, lookup: &UserLookup) -> Result<bool, UsersServiceError> {
        let select = users::Entity::find().filter(user_condition(lookup));
        Ok(exists(select, self.db.as_ref()).await.context("check user exists")?)
    }

    async fn create(&self, user: &User) -> Result<(), UsersServiceError> {
        user_active_model(user)
            .insert(self.db.as_ref())
            .await
            .map_err(|e| write_error(e, UsersServiceError::UserAlreadyExists, "create user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<User, UsersServiceError> {
        let mut am = user_active_model(user);
        am.updated_at = Set(Utc::now());
        let model = am
            .update(self.db.as_ref())
            .await
            .map_err(|e| write_error(e, UsersServiceError::UserAlreadyExists, "update user"))?;
        user_from_model(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), UsersServiceError> {
        users::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .context("delete user")?;
        Ok(())
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<User>, UsersServiceError> {
        let select = users::Entity::find().apply_list_query(query, &USER_FIELDS)?;
        let page = fetch_page(select, self.db.as_ref(), query.page)
            .await
            .context("list users")?;
        try_page(page, user_from_model)
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        username: Set(user.username.clone()),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        user_type: Set(user.user_type.value()),
        mobile: Set(user.mobile.clone()),
        email: Set(user.email.clone()),
        state: Set(user.state.clone()),
        city: Set(user.city.clone()),
        zip_code: Set(user.zip_code.clone()),
        town: Set(user.town.clone()),
        address: Set(user.address.clone()),
        gender: Set(user.gender.map(|g| g.value().to_owned())),
        marital_status: Set(user.marital_status.map(|m| m.value().to_owned())),
        newsletter: Set(user.newsletter),
        is_confirmed: Set(user.is_confirmed),
        first_login: Set(user.first_login),
        is_active: Set(user.is_active),
        secret_key: Set(user.secret_key.clone()),
        public_key: Set(user.public_key.clone()),
        referral_code: Set(user.referral_code.clone()),
        date_joined: Set(user.date_joined),
        updated_at: Set(user.updated_at),
    }
}

fn user_from_model(model: users::Model) -> Result<User, UsersServiceError> {
    Ok(User {
        id: model.id,
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        user_type: stored::<UserType, _>("type", &model.user_type)?,
        mobile: model.mobile,
        email: model.email,
        state: model.state,
        city: model.city,
        zip_code: model.zip_code,
        town: model.town,
        address: model.address,
        gender: stored_opt::<GenderType>("gender", model.gender.as_deref())?,
        marital_status: stored_opt::<MaritalType>("marital_status", model.marital_status.as_deref())?,
        newsletter: model.newsletter,
        is_confirmed: model.is_confirmed,
        first_login: model.first_login,
        is_active: model.is_active,
        secret_key: model.secret_key,
        public_key: model.public_key,
        referral_code: model.referral_code,
        date_joined: model.date_joined,
        updated_at: model.updated_at,
    })
}

// ── Group repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGroupRepository {
    pub db: Arc<DatabaseConnection>,
}

impl GroupRepository for DbGroupRepository {
    async fn list_names(&self, user_id: Uuid) -> Result<Vec<String>, UsersServiceError> {
        let models = user_groups::Entity::find()
            .filter(user_groups::Column::UserId.eq(user_id))
            .order_by_asc(user_groups::Column::CreatedAt)
            .order_by_asc(user_groups::Column::Name)
            .all(self.db.as_ref())
            .await
            .context("list user groups")?;
        Ok(models.into_iter().map(|m| m.name).collect())
    }

    async fn has_group(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError> {
        let select = user_groups::Entity::find()
            .filter(user_groups::Column::UserId.eq(user_id))
            .filter(user_groups::Column::Name.eq(name));
        Ok(exists(select, self.db.as_ref()).await.context("check user group")?)
    }

    async fn add(&self, user_id: Uuid, name: &str) -> Result<bool, UsersServiceError> {
        let inserted = membership(user_id, name, Utc::now())
            .exec_without_returning(self.db.as_ref())
            .await
            .context("add user group")?;
        Ok(inserted > 0)
    }
}

// ── Auth token repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthTokenRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AuthTokenRepository for DbAuthTokenRepository {
    async fn create(&self, token: &AuthToken) -> Result<(), UsersServiceError> {
        auth_tokens::ActiveModel {
            id: Set(token.id),
            user_id: Set(token.user_id),
            token_type: Set(token.token_type.value()),
            token: Set(token.token.clone()),
            status: Set(token.status.value()),
            expiry: Set(token.expiry),
            created_at: Set(token.created_at),
            updated_at: Set(token.updated_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("create auth token")?;
        Ok(())
    }

    async fn count_pending(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        now: DateTime<Utc>,
    ) -> Result<u64, UsersServiceError> {
        let count = auth_tokens::Entity::find()
            .filter(auth_tokens::Column::UserId.eq(user_id))
            .filter(auth_tokens::Column::TokenType.eq(token_type.value()))
            .filter(auth_tokens::Column::Status.eq(AuthTokenStatus::Pending.value()))
            .filter(auth_tokens::Column::Expiry.gt(now))
            .count(self.db.as_ref())
            .await
            .context("count pending auth tokens")?;
        Ok(count)
    }

    async fn find_latest(
        &self,
        user_id: Uuid,
        token_type: AuthTokenType,
        token: &str,
    ) -> Result<Option<AuthToken>, UsersServiceError> {
        let model = auth_tokens::Entity::find()
            .filter(auth_tokens::Column::UserId.eq(user_id))
            .filter(auth_tokens::Column::TokenType.eq(token_type.value()))
            .filter(auth_tokens::Column::Token.eq(token))
            .order_by_desc(auth_tokens::Column::CreatedAt)
            .one(self.db.as_ref())
            .await
            .context("find auth token")?;
        model.map(auth_token_from_model).transpose()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: AuthTokenStatus,
    ) -> Result<(), UsersServiceError> {
        auth_tokens::ActiveModel {
            id: Set(id),
            status: Set(status.value()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .context("set auth token status")?;
        Ok(())
    }

    async fn delete_first(&self, filter: &AuthTokenFilter) -> Result<bool, UsersServiceError> {
        let mut select = auth_tokens::Entity::find();
        if let Some(user_id) = filter.user_id {
            select = select.filter(auth_tokens::Column::UserId.eq(user_id));
        }
        if let Some(token_type) = filter.token_type {
            select = select.filter(auth_tokens::Column::TokenType.eq(token_type.value()));
        }
        if let Some(ref token) = filter.token {
            select = select.filter(auth_tokens::Column::Token.eq(token.as_str()));
        }
        let Some(model) = select
            .order_by_desc(auth_tokens::Column::CreatedAt)
            .one(self.db.as_ref())
            .await
            .context("find auth token to delete")?
        else {
            return Ok(false);
        };
        auth_tokens::Entity::delete_by_id(model.id)
            .exec(self.db.as_ref())
            .await
            .context("delete auth token")?;
        Ok(true)
    }
}

fn auth_token_from_model(model: auth_tokens::Model) -> Result<AuthToken, UsersServiceError> {
    Ok(AuthToken {
        id: model.id,
        user_id: model.user_id,
        token_type: stored::<AuthTokenType, _>("type", &model.token_type)?,
        token: model.token,
        status: stored::<AuthTokenStatus, _>("status", &model.status)?,
        expiry: model.expiry,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Staff settings repository ────────────────────────────────────────────────

const STAFF_FIELDS: ListFields<staff_settings::Entity> = ListFields {
    search: &[
        staff_settings::Column::StaffName,
        staff_settings::Column::State,
        staff_settings::Column::LocalGovt,
        staff_settings::Column::AccountName,
    ],
    filter: &[
        staff_settings::Column::UserId,
        staff_settings::Column::Category,
        staff_settings::Column::StaffType,
        staff_settings::Column::State,
        staff_settings::Column::Disability,
    ],
    ordering: &[
        staff_settings::Column::CreatedAt,
        staff_settings::Column::StaffName,
    ],
    primary_key: staff_settings::Column::Id,
};

#[derive(Clone)]
pub struct DbStaffSettingsRepository {
    pub db: Arc<DatabaseConnection>,
}

impl StaffSettingsRepository for DbStaffSettingsRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffSettings>, UsersServiceError> {
        let model = staff_settings::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find staff settings by id")?;
        model.map(staff_from_model).transpose()
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffSettings>, UsersServiceError> {
        let model = staff_settings::Entity::find()
            .filter(staff_settings::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .context("find staff settings by user")?;
        model.map(staff_from_model).transpose()
    }

    async fn enroll(&self, settings: &StaffSettings) -> Result<(), UsersServiceError> {
        let profile = staff_active_model(settings);
        let user_id = settings.user_id;
        let now = settings.created_at;
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    staff_settings::Entity::insert(profile)
                        .exec_without_returning(txn)
                        .await?;
                    users::Entity::update_many()
                        .col_expr(users::Column::UserType, Expr::value(UserType::Staff.value()))
                        .col_expr(users::Column::UpdatedAt, Expr::value(now))
                        .filter(users::Column::Id.eq(user_id))
                        .exec(txn)
                        .await?;
                    membership(user_id, UserGroup::Staff.value(), now)
                        .exec_without_returning(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| {
                write_error(
                    transaction_error(e),
                    UsersServiceError::StaffSettingsAlreadyExists,
                    "enroll staff",
                )
            })?;
        Ok(())
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<StaffSettings>, UsersServiceError> {
        let select = staff_settings::Entity::find().apply_list_query(query, &STAFF_FIELDS)?;
        let page = fetch_page(select, self.db.as_ref(), query.page)
            .await
            .context("list staff settings")?;
        try_page(page, staff_from_model)
    }
}

fn staff_active_model(settings: &StaffSettings) -> staff_settings::ActiveModel {
    staff_settings::ActiveModel {
        id: Set(settings.id),
        user_id: Set(settings.user_id),
        category: Set(settings.category.map(|c| c.value().to_owned())),
        staff_name: Set(settings.staff_name.clone()),
        staff_type: Set(settings.staff_type.map(|t| t.value().to_owned())),
        state: Set(settings.state.clone()),
        local_govt: Set(settings.local_govt.clone()),
        address: Set(settings.address.clone()),
        disability: Set(settings.disability.map(|d| d.value().to_owned())),
        image: Set(settings.image.clone()),
        bank_code: Set(settings.bank.bank_code.clone()),
        bank_name: Set(settings.bank.bank_name.clone()),
        account_number: Set(settings.bank.account_number.clone()),
        account_name: Set(settings.bank.account_name.clone()),
        created_at: Set(settings.created_at),
        updated_at: Set(settings.updated_at),
    }
}

fn staff_from_model(model: staff_settings::Model) -> Result<StaffSettings, UsersServiceError> {
    Ok(StaffSettings {
        id: model.id,
        user_id: model.user_id,
        category: stored_opt::<StaffType>("category", model.category.as_deref())?,
        staff_name: model.staff_name,
        staff_type: stored_opt::<StaffType>("type", model.staff_type.as_deref())?,
        state: model.state,
        local_govt: model.local_govt,
        address: model.address,
        disability: stored_opt::<DisabilityType>("disability", model.disability.as_deref())?,
        image: model.image,
        bank: BankDetails {
            bank_code: model.bank_code,
            bank_name: model.bank_name,
            account_number: model.account_number,
            account_name: model.account_name,
        },
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Delivery address repository ──────────────────────────────────────────────

const ADDRESS_FIELDS: ListFields<delivery_addresses::Entity> = ListFields {
    search: &[
        delivery_addresses::Column::LocationName,
        delivery_addresses::Column::Address,
        delivery_addresses::Column::City,
        delivery_addresses::Column::State,
    ],
    filter: &[
        delivery_addresses::Column::IsDefaultAddress,
        delivery_addresses::Column::City,
        delivery_addresses::Column::State,
        delivery_addresses::Column::ZipCode,
    ],
    ordering: &[
        delivery_addresses::Column::Id,
        delivery_addresses::Column::LocationName,
        delivery_addresses::Column::IsDefaultAddress,
    ],
    primary_key: delivery_addresses::Column::Id,
};

#[derive(Clone)]
pub struct DbDeliveryAddressRepository {
    pub db: Arc<DatabaseConnection>,
}

impl DeliveryAddressRepository for DbDeliveryAddressRepository {
    async fn list(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<Page<DeliveryAddress>, UsersServiceError> {
        let select = delivery_addresses::Entity::find()
            .filter(delivery_addresses::Column::UserId.eq(user_id))
            .apply_list_query(query, &ADDRESS_FIELDS)?;
        let page = fetch_page(select, self.db.as_ref(), query.page)
            .await
            .context("list delivery addresses")?;
        Ok(page.map(address_from_model))
    }

    async fn find(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<DeliveryAddress>, UsersServiceError> {
        let model = delivery_addresses::Entity::find_by_id(id)
            .filter(delivery_addresses::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .context("find delivery address")?;
        Ok(model.map(address_from_model))
    }

    async fn create(
        &self,
        address: &NewDeliveryAddress,
    ) -> Result<DeliveryAddress, UsersServiceError> {
        let model = delivery_addresses::ActiveModel {
            id: NotSet,
            user_id: Set(address.user_id),
            location_name: Set(address.location_name.clone()),
            address: Set(address.address.clone()),
            zip_code: Set(address.zip_code.clone()),
            city: Set(address.city.clone()),
            state: Set(address.state.clone()),
            phone_number: Set(address.phone_number.clone()),
            is_default_address: Set(address.is_default_address),
        }
        .insert(self.db.as_ref())
        .await
        .context("create delivery address")?;
        Ok(address_from_model(model))
    }

    async fn update(&self, address: &DeliveryAddress) -> Result<(), UsersServiceError> {
        delivery_addresses::ActiveModel {
            id: Set(address.id),
            user_id: Set(address.user_id),
            location_name: Set(address.location_name.clone()),
            address: Set(address.address.clone()),
            zip_code: Set(address.zip_code.clone()),
            city: Set(address.city.clone()),
            state: Set(address.state.clone()),
            phone_number: Set(address.phone_number.clone()),
            is_default_address: Set(address.is_default_address),
        }
        .update(self.db.as_ref())
        .await
        .context("update delivery address")?;
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, UsersServiceError> {
        let result = delivery_addresses::Entity::delete_many()
            .filter(delivery_addresses::Column::Id.eq(id))
            .filter(delivery_addresses::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .context("delete delivery address")?;
        Ok(result.rows_affected > 0)
    }
}

fn address_from_model(model: delivery_addresses::Model) -> DeliveryAddress {
    DeliveryAddress {
        id: model.id,
        user_id: model.user_id,
        location_name: model.location_name,
        address: model.address,
        zip_code: model.zip_code,
        city: model.city,
        state: model.state,
        phone_number: model.phone_number,
        is_default_address: model.is_default_address,
    }
}

// ── Wallet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWalletRepository {
    pub db: Arc<DatabaseConnection>,
}

impl WalletRepository for DbWalletRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Wallet>, UsersServiceError> {
        let model = wallets::Entity::find()
            .filter(wallets::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .context("find wallet by user")?;
        Ok(model.map(wallet_from_model))
    }

    async fn create(&self, wallet: &Wallet) -> Result<(), UsersServiceError> {
        wallets::ActiveModel {
            id: Set(wallet.id),
            identifier: Set(wallet.identifier.clone()),
            user_id: Set(wallet.user_id),
            amount: Set(wallet.amount),
            ledger_balance: Set(wallet.ledger_balance),
            created_at: Set(wallet.created_at),
            updated_at: Set(wallet.updated_at),
        }
        .insert(self.db.as_ref())
        .await
        .map_err(|e| write_error(e, UsersServiceError::WalletAlreadyExists, "create wallet"))?;
        Ok(())
    }
}

fn wallet_from_model(model: wallets::Model) -> Wallet {
    Wallet {
        id: model.id,
        identifier: model.identifier,
        user_id: model.user_id,
        amount: model.amount,
        ledger_balance: model.ledger_balance,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Uniqueness checks ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUniqueness {
    pub db: Arc<DatabaseConnection>,
}

impl UniquenessPort for DbUniqueness {
    async fn is_taken(&self, field: UniqueField, value: &str) -> Result<bool, UsersServiceError> {
        let taken = match field {
            // Spent and expired codes may be reissued.
            UniqueField::AuthTokenCode => {
                let select = auth_tokens::Entity::find()
                    .filter(auth_tokens::Column::Token.eq(value))
                    .filter(auth_tokens::Column::Status.eq(AuthTokenStatus::Pending.value()))
                    .filter(auth_tokens::Column::Expiry.gt(Utc::now()));
                exists(select, self.db.as_ref()).await
            }
            UniqueField::ReferralCode => {
                let select = users::Entity::find().filter(users::Column::ReferralCode.eq(value));
                exists(select, self.db.as_ref()).await
            }
            UniqueField::WalletIdentifier => {
                let select = wallets::Entity::find().filter(wallets::Column::Identifier.eq(value));
                exists(select, self.db.as_ref()).await
            }
        };
        Ok(taken.with_context(|| format!("check {field:?} uniqueness"))?)
    }
}

use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bazaar_auth_types::identity::IdentityHeaders;
use bazaar_core::response::ApiResponse;
use bazaar_domain::choice::ChoiceEnum;
use bazaar_domain::user::{GenderType, MaritalType, UserType};

use crate::domain::types::{Profile, User, UserLookup, UserPatch, primary_group};
use crate::error::UsersServiceError;
use crate::extract::{QueryParams, ValidatedJson};
use crate::handlers::staff::StaffSettingsResponse;
use crate::state::AppState;
use crate::usecase::staff::GetStaffSettingsUseCase;
use crate::usecase::user::{
    ConfirmMobileUseCase, GetProfileUseCase, RegisterUserInput, RegisterUserUseCase,
    UpdateProfileUseCase, VerifyUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub user_type: i16,
    pub mobile: String,
    pub email: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: String,
    pub gender: Option<&'static str>,
    pub marital_status: Option<&'static str>,
    pub newsletter: bool,
    pub is_confirmed: bool,
    pub first_login: bool,
    pub is_active: bool,
    pub referral_code: Option<String>,
    /// Omitted from list results, which do not load memberships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub date_joined: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserResponse {
    pub fn new(user: User, group: Option<String>) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            user_type: user.user_type.value(),
            mobile: user.mobile,
            email: user.email,
            state: user.state,
            city: user.city,
            zip_code: user.zip_code,
            town: user.town,
            address: user.address,
            gender: user.gender.map(ChoiceEnum::value),
            marital_status: user.marital_status.map(ChoiceEnum::value),
            newsletter: user.newsletter,
            is_confirmed: user.is_confirmed,
            first_login: user.first_login,
            is_active: user.is_active,
            referral_code: user.referral_code,
            group,
            date_joined: user.date_joined,
            updated_at: user.updated_at,
        }
    }
}

impl From<Profile> for UserResponse {
    fn from(profile: Profile) -> Self {
        let group = profile.group().to_owned();
        Self::new(profile.user, Some(group))
    }
}

fn parse_gender(value: Option<&str>) -> Result<Option<GenderType>, UsersServiceError> {
    Ok(value.map(|v| GenderType::parse("gender", v)).transpose()?)
}

fn parse_marital(value: Option<&str>) -> Result<Option<MaritalType>, UsersServiceError> {
    Ok(value
        .map(|v| MaritalType::parse("marital_status", v))
        .transpose()?)
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 7, max = 20, message = "Enter a valid mobile number"))]
    pub mobile: String,
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 150, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 150, message = "Last name is required"))]
    pub last_name: String,
    #[serde(rename = "type")]
    pub user_type: Option<i16>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: Option<String>,
    pub newsletter: Option<bool>,
}

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<UserResponse>, UsersServiceError> {
    let user_type = match body.user_type {
        Some(value) => UserType::parse("type", &value)?,
        None => UserType::default_member(),
    };
    let input = RegisterUserInput {
        gender: parse_gender(body.gender.as_deref())?,
        marital_status: parse_marital(body.marital_status.as_deref())?,
        mobile: body.mobile,
        username: body.username,
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
        user_type,
        state: body.state,
        city: body.city,
        zip_code: body.zip_code,
        town: body.town,
        address: body.address.unwrap_or_default(),
        newsletter: body.newsletter.unwrap_or(true),
    };
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        unique: state.uniqueness(),
        issuer: state.auth_token_issuer(),
    };
    let user = usecase.execute(input).await?;
    let group = primary_group(&[]).to_owned();
    Ok(ApiResponse::created(UserResponse::new(user, Some(group))))
}

// ── POST /users/verification ─────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct ConfirmMobileRequest {
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

pub async fn confirm_mobile(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ConfirmMobileRequest>,
) -> Result<ApiResponse<UserResponse>, UsersServiceError> {
    let usecase = ConfirmMobileUseCase {
        users: state.user_repo(),
        tokens: state.auth_token_consumer(),
    };
    let user = usecase.execute(&body.mobile, &body.code).await?;
    Ok(ApiResponse::ok(UserResponse::new(user, None)))
}

// ── GET /users/verify ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyQuery {
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl VerifyQuery {
    fn lookup(self) -> Option<UserLookup> {
        self.mobile
            .map(UserLookup::Mobile)
            .or(self.email.map(UserLookup::Email))
            .or(self.username.map(UserLookup::Username))
    }
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub exists: bool,
}

pub async fn verify_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<VerifyQuery>,
) -> Result<ApiResponse<VerifyResponse>, UsersServiceError> {
    let lookup = query.lookup().ok_or(UsersServiceError::MissingData)?;
    let usecase = VerifyUserUseCase {
        users: state.user_repo(),
    };
    let exists = usecase.execute(&lookup).await?;
    Ok(ApiResponse::ok(VerifyResponse { exists }))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<ApiResponse<UserResponse>, UsersServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        groups: state.group_repo(),
    };
    let profile = usecase.execute(identity.user_id).await?;
    Ok(ApiResponse::ok(profile.into()))
}

// ── PATCH /users/@me ─────────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[validate(length(min = 1, max = 150))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub last_name: Option<String>,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub newsletter: Option<bool>,
}

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateMeRequest>,
) -> Result<ApiResponse<UserResponse>, UsersServiceError> {
    let patch = UserPatch {
        gender: parse_gender(body.gender.as_deref())?,
        marital_status: parse_marital(body.marital_status.as_deref())?,
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        state: body.state,
        city: body.city,
        zip_code: body.zip_code,
        town: body.town,
        address: body.address,
        newsletter: body.newsletter,
    };
    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
        groups: state.group_repo(),
    };
    let profile = usecase.execute(identity.user_id, patch).await?;
    Ok(ApiResponse::ok(profile.into()))
}

// ── GET /users/@me/staff-settings ────────────────────────────────────────────

pub async fn get_my_staff_settings(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<ApiResponse<StaffSettingsResponse>, UsersServiceError> {
    let usecase = GetStaffSettingsUseCase {
        staff: state.staff_repo(),
    };
    let settings = usecase.execute_for_user(identity.user_id).await?;
    Ok(ApiResponse::ok(settings.into()))
}

use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bazaar_core::response::ApiResponse;
use bazaar_domain::choice::{ChoiceEnum, InvalidChoice};
use bazaar_domain::pagination::Page;
use bazaar_domain::user::{DisabilityType, StaffType, UserGroup};

use crate::domain::types::{BankDetails, StaffSettings};
use crate::error::UsersServiceError;
use crate::extract::{ListParams, PathParams, ValidatedJson};
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::staff::{
    CreateStaffInput, CreateStaffUseCase, GetStaffSettingsUseCase, ListStaffSettingsUseCase,
};
use crate::usecase::user::{AddUserToGroupUseCase, GetProfileUseCase, ListUsersUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StaffSettingsResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Option<&'static str>,
    pub staff_name: Option<String>,
    #[serde(rename = "type")]
    pub staff_type: Option<&'static str>,
    pub state: Option<String>,
    pub local_govt: Option<String>,
    pub address: String,
    pub disability: Option<&'static str>,
    pub image: Option<String>,
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<StaffSettings> for StaffSettingsResponse {
    fn from(s: StaffSettings) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            category: s.category.map(ChoiceEnum::value),
            staff_name: s.staff_name,
            staff_type: s.staff_type.map(ChoiceEnum::value),
            state: s.state,
            local_govt: s.local_govt,
            address: s.address,
            disability: s.disability.map(ChoiceEnum::value),
            image: s.image,
            bank_code: s.bank.bank_code,
            bank_name: s.bank.bank_name,
            account_number: s.bank.account_number,
            account_name: s.bank.account_name,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

// ── GET /staff/users ─────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<ApiResponse<Page<UserResponse>>, UsersServiceError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let page = usecase.execute(&query).await?;
    Ok(ApiResponse::ok(page.map(|user| UserResponse::new(user, None))))
}

// ── GET /staff/users/{id} ────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Result<ApiResponse<UserResponse>, UsersServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        groups: state.group_repo(),
    };
    let profile = usecase.execute(user_id).await?;
    Ok(ApiResponse::ok(profile.into()))
}

// ── PUT /staff/users/{id}/groups/{group} ─────────────────────────────────────

#[derive(Serialize)]
pub struct GroupMembershipResponse {
    pub user_id: Uuid,
    pub group: &'static str,
    pub added: bool,
}

/// Accepts a stored group value (`facilitator`) or a member name (`agent`).
fn parse_group(raw: &str) -> Result<UserGroup, InvalidChoice> {
    UserGroup::parse("group", raw).or_else(|err| UserGroup::from_name(raw).ok_or(err))
}

pub async fn add_user_to_group(
    State(state): State<AppState>,
    PathParams((user_id, group)): PathParams<(Uuid, String)>,
) -> Result<ApiResponse<GroupMembershipResponse>, UsersServiceError> {
    let group = parse_group(&group)?;
    let usecase = AddUserToGroupUseCase {
        users: state.user_repo(),
        groups: state.group_repo(),
    };
    let added = usecase.execute(user_id, group).await?;
    Ok(ApiResponse::ok(GroupMembershipResponse {
        user_id,
        group: group.value(),
        added,
    }))
}

// ── GET /staff/settings ──────────────────────────────────────────────────────

pub async fn list_staff_settings(
    State(state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<ApiResponse<Page<StaffSettingsResponse>>, UsersServiceError> {
    let usecase = ListStaffSettingsUseCase {
        staff: state.staff_repo(),
    };
    let page = usecase.execute(&query).await?;
    Ok(ApiResponse::ok(page.map(Into::into)))
}

// ── POST /staff/settings ─────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct CreateStaffSettingsRequest {
    pub user_id: Uuid,
    pub category: Option<String>,
    #[validate(length(max = 255))]
    pub staff_name: Option<String>,
    #[serde(rename = "type")]
    pub staff_type: Option<String>,
    pub state: Option<String>,
    pub local_govt: Option<String>,
    pub address: Option<String>,
    pub disability: Option<String>,
    #[validate(url(message = "Enter a valid image URL"))]
    pub image: Option<String>,
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    #[validate(length(min = 10, max = 10, message = "Account number must be 10 digits"))]
    pub account_number: Option<String>,
    pub account_name: Option<String>,
}

pub async fn create_staff_settings(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateStaffSettingsRequest>,
) -> Result<ApiResponse<StaffSettingsResponse>, UsersServiceError> {
    let input = CreateStaffInput {
        user_id: body.user_id,
        category: body
            .category
            .as_deref()
            .map(|v| StaffType::parse("category", v))
            .transpose()?,
        staff_name: body.staff_name,
        staff_type: body
            .staff_type
            .as_deref()
            .map(|v| StaffType::parse("type", v))
            .transpose()?,
        state: body.state,
        local_govt: body.local_govt,
        address: body.address.unwrap_or_default(),
        disability: body
            .disability
            .as_deref()
            .map(|v| DisabilityType::parse("disability", v))
            .transpose()?,
        image: body.image,
        bank: BankDetails {
            bank_code: body.bank_code,
            bank_name: body.bank_name,
            account_number: body.account_number,
            account_name: body.account_name,
        },
    };
    let usecase = CreateStaffUseCase {
        users: state.user_repo(),
        staff: state.staff_repo(),
    };
    let settings = usecase.execute(input).await?;
    Ok(ApiResponse::created(settings.into()))
}

// ── GET /staff/settings/{id} ─────────────────────────────────────────────────

pub async fn get_staff_settings(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<ApiResponse<StaffSettingsResponse>, UsersServiceError> {
    let usecase = GetStaffSettingsUseCase {
        staff: state.staff_repo(),
    };
    let settings = usecase.execute(id).await?;
    Ok(ApiResponse::ok(settings.into()))
}

use axum::{
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bazaar_auth_types::identity::IdentityHeaders;
use bazaar_core::response::ApiResponse;
use bazaar_domain::pagination::Page;

use crate::domain::types::{DeliveryAddress, DeliveryAddressPatch, NewDeliveryAddress};
use crate::error::UsersServiceError;
use crate::extract::{ListParams, PathParams, ValidatedJson};
use crate::state::AppState;
use crate::usecase::address::{
    CreateAddressUseCase, DeleteAddressUseCase, GetAddressUseCase, ListAddressesUseCase,
    UpdateAddressUseCase,
};

#[derive(Serialize)]
pub struct AddressResponse {
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

impl From<DeliveryAddress> for AddressResponse {
    fn from(a: DeliveryAddress) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            location_name: a.location_name,
            address: a.address,
            zip_code: a.zip_code,
            city: a.city,
            state: a.state,
            phone_number: a.phone_number,
            is_default_address: a.is_default_address,
        }
    }
}

// ── GET /users/@me/addresses ─────────────────────────────────────────────────

pub async fn list_addresses(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<ApiResponse<Page<AddressResponse>>, UsersServiceError> {
    let usecase = ListAddressesUseCase {
        repo: state.address_repo(),
    };
    let page = usecase.execute(identity.user_id, &query).await?;
    Ok(ApiResponse::ok(page.map(Into::into)))
}

// ── POST /users/@me/addresses ────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255, message = "Location name is required"))]
    pub location_name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(length(min = 7, max = 20, message = "Enter a valid phone number"))]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_default_address: bool,
}

pub async fn create_address(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateAddressRequest>,
) -> Result<ApiResponse<AddressResponse>, UsersServiceError> {
    let usecase = CreateAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase
        .execute(NewDeliveryAddress {
            user_id: identity.user_id,
            location_name: body.location_name,
            address: body.address.unwrap_or_default(),
            zip_code: body.zip_code,
            city: body.city,
            state: body.state,
            phone_number: body.phone_number,
            is_default_address: body.is_default_address,
        })
        .await?;
    Ok(ApiResponse::created(address.into()))
}

// ── GET /users/@me/addresses/{id} ────────────────────────────────────────────

pub async fn get_address(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<ApiResponse<AddressResponse>, UsersServiceError> {
    let usecase = GetAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase.execute(identity.user_id, id).await?;
    Ok(ApiResponse::ok(address.into()))
}

// ── PATCH /users/@me/addresses/{id} ──────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub location_name: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(length(min = 7, max = 20, message = "Enter a valid phone number"))]
    pub phone_number: Option<String>,
    pub is_default_address: Option<bool>,
}

pub async fn update_address(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(body): ValidatedJson<UpdateAddressRequest>,
) -> Result<ApiResponse<AddressResponse>, UsersServiceError> {
    let usecase = UpdateAddressUseCase {
        repo: state.address_repo(),
    };
    let patch = DeliveryAddressPatch {
        location_name: body.location_name,
        address: body.address,
        zip_code: body.zip_code,
        city: body.city,
        state: body.state,
        phone_number: body.phone_number,
        is_default_address: body.is_default_address,
    };
    let address = usecase.execute(identity.user_id, id, patch).await?;
    Ok(ApiResponse::ok(address.into()))
}

// ── DELETE /users/@me/addresses/{id} ─────────────────────────────────────────

pub async fn delete_address(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<StatusCode, UsersServiceError> {
    let usecase = DeleteAddressUseCase {
        repo: state.address_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

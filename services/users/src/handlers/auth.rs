use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bazaar_auth_types::{
    cookie::{BAZAAR_ACCESS_TOKEN, clear_access_token_cookie, set_access_token_cookie},
    identity::IdentityHeaders,
    token::validate_access_token,
};
use bazaar_core::response::ApiResponse;

use crate::error::UsersServiceError;
use crate::extract::ValidatedJson;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::session::{LoginUseCase, RequestLoginCodeUseCase};

pub const X_BAZAAR_ACCESS_TOKEN_EXPIRES: HeaderName =
    HeaderName::from_static("x-bazaar-access-token-expires");

fn token_expires_headers(exp: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_BAZAAR_ACCESS_TOKEN_EXPIRES, HeaderValue::from(exp));
    headers
}

// ── POST /auth/code ──────────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct CreateAuthCodeRequest {
    #[validate(length(min = 7, max = 20, message = "Enter a valid mobile number"))]
    pub mobile: String,
}

#[derive(Serialize)]
pub struct AuthCodeResponse {
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub expiry: chrono::DateTime<chrono::Utc>,
}

pub async fn create_auth_code(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateAuthCodeRequest>,
) -> Result<ApiResponse<AuthCodeResponse>, UsersServiceError> {
    let usecase = RequestLoginCodeUseCase {
        users: state.user_repo(),
        issuer: state.auth_token_issuer(),
    };
    let token = usecase.execute(&body.mobile).await?;
    Ok(ApiResponse::created(AuthCodeResponse {
        token_type: token.token_type.to_string(),
        expiry: token.expiry,
    }))
}

// ── GET /auth/token ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckTokenResponse {
    pub user_id: Uuid,
    pub groups: Vec<String>,
    pub access_token_exp: u64,
}

pub async fn check_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, UsersServiceError> {
    let token_value = jar
        .get(BAZAAR_ACCESS_TOKEN)
        .map(|c| c.value().to_owned())
        .ok_or(UsersServiceError::InvalidAccessToken)?;

    let info = validate_access_token(&token_value, &state.jwt_secret).map_err(|err| {
        tracing::debug!(error = %err, "access token rejected");
        UsersServiceError::InvalidAccessToken
    })?;

    let headers = token_expires_headers(info.access_token_exp);
    let body = CheckTokenResponse {
        user_id: info.user_id,
        groups: info.groups,
        access_token_exp: info.access_token_exp,
    };
    Ok((headers, ApiResponse::ok(body)))
}

// ── POST /auth/token ─────────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct CreateTokenRequest {
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

#[derive(Serialize)]
pub struct CreateTokenResponse {
    pub access_token: String,
    pub access_token_exp: u64,
    pub user: UserResponse,
}

pub async fn create_token(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<CreateTokenRequest>,
) -> Result<impl IntoResponse, UsersServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        groups: state.group_repo(),
        tokens: state.auth_token_consumer(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&body.mobile, &body.code).await?;

    let jar = set_access_token_cookie(jar, out.access_token.clone(), state.cookie_domain.clone());
    let headers = token_expires_headers(out.access_token_exp);
    let body = CreateTokenResponse {
        access_token: out.access_token,
        access_token_exp: out.access_token_exp,
        user: out.profile.into(),
    };
    Ok((jar, headers, ApiResponse::created(body)))
}

// ── DELETE /auth/token ───────────────────────────────────────────────────────

pub async fn revoke_token(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = clear_access_token_cookie(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bazaar_core::response::ErrorBody;
use bazaar_core::sea_ext::ListError;
use bazaar_domain::choice::InvalidChoice;

/// Users service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum UsersServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("delivery address not found")]
    AddressNotFound,
    #[error("staff settings not found")]
    StaffSettingsNotFound,
    #[error("wallet not found")]
    WalletNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("staff settings already exist")]
    StaffSettingsAlreadyExists,
    #[error("wallet already exists")]
    WalletAlreadyExists,
    #[error("invalid or expired code")]
    InvalidAuthToken,
    #[error("too many pending codes")]
    TooManyAuthTokens,
    #[error("invalid access token")]
    InvalidAccessToken,
    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),
    #[error("{value:?} is not a valid value for filter {field}")]
    InvalidFilter { field: String, value: String },
    #[error("{}", summarize(.0))]
    Validation(BTreeMap<String, String>),
    #[error("malformed request body")]
    MalformedBody,
    #[error("malformed query string")]
    MalformedQuery,
    #[error("malformed path parameter")]
    MalformedPath,
    #[error("missing data")]
    MissingData,
    #[error("You currently do not have access to this resource")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ListError> for UsersServiceError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::InvalidFilter { field, value } => Self::InvalidFilter { field, value },
            ListError::Db(e) => Self::Internal(anyhow::Error::new(e).context("list query")),
        }
    }
}

impl UsersServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::StaffSettingsNotFound => "STAFF_SETTINGS_NOT_FOUND",
            Self::WalletNotFound => "WALLET_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::StaffSettingsAlreadyExists => "STAFF_SETTINGS_ALREADY_EXISTS",
            Self::WalletAlreadyExists => "WALLET_ALREADY_EXISTS",
            Self::InvalidAuthToken => "INVALID_AUTH_TOKEN",
            Self::TooManyAuthTokens => "TOO_MANY_AUTH_TOKENS",
            Self::InvalidAccessToken => "INVALID_ACCESS_TOKEN",
            Self::InvalidChoice(_) => "INVALID_CHOICE",
            Self::InvalidFilter { .. } => "INVALID_FILTER",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::MalformedQuery => "MALFORMED_QUERY",
            Self::MalformedPath => "MALFORMED_PATH",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound
            | Self::AddressNotFound
            | Self::StaffSettingsNotFound
            | Self::WalletNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists
            | Self::StaffSettingsAlreadyExists
            | Self::WalletAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidAuthToken
            | Self::InvalidChoice(_)
            | Self::InvalidFilter { .. }
            | Self::Validation(_)
            | Self::MalformedBody
            | Self::MalformedQuery
            | Self::MalformedPath
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::TooManyAuthTokens => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidAccessToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UsersServiceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = ErrorBody::new(self.status(), self.kind(), self.to_string());
        match self {
            Self::Validation(errors) => body.with_errors(errors).into_response(),
            _ => body.into_response(),
        }
    }
}

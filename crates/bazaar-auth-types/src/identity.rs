//! Gateway-injected identity header extractor.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use bazaar_core::response::ErrorBody;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Header carrying the authenticated user's id, set by the gateway.
pub const X_BAZAAR_USER_ID: &str = "x-bazaar-user-id";

/// Rejection for requests without a usable `x-bazaar-user-id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingIdentity;

impl IntoResponse for MissingIdentity {
    fn into_response(self) -> Response {
        ErrorBody::new(
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "authentication credentials were not provided",
        )
        .into_response()
    }
}

/// User identity injected by the gateway via the `x-bazaar-user-id` header.
///
/// Rejects with a 401 envelope if the header is absent or cannot be parsed as UUID.
/// Group checks (403) happen after extraction, against the database.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
}

impl IdentityHeaders {
    /// Read the identity from request headers without going through the extractor.
    pub fn from_headers(headers: &http::HeaderMap) -> Option<Self> {
        headers
            .get(X_BAZAAR_USER_ID)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok())
            .map(|user_id| Self { user_id })
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = MissingIdentity;

    // axum-core 0.5 defines this as `fn -> impl Future + Send`; extract synchronously
    // and return a 'static future so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_headers(&parts.headers);
        async move { identity.ok_or(MissingIdentity) }
    }
}

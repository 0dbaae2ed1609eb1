use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use bazaar_domain::pagination::ListQuery;

use crate::addon::validate;
use crate::error::UsersServiceError;

/// JSON body that must also pass its `validator` rules.
///
/// Undecodable bodies are `MALFORMED_BODY`; rule failures are
/// `VALIDATION_FAILED` with a message per field.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = UsersServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected request body");
                UsersServiceError::MalformedBody
            })?;
        validate(&data)?;
        Ok(Self(data))
    }
}

/// Path parameters; a segment that does not parse is `MALFORMED_PATH`.
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = UsersServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected path parameters");
                UsersServiceError::MalformedPath
            })?;
        Ok(Self(value))
    }
}

/// Typed query string; undecodable input is `MALFORMED_QUERY`.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UsersServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected query string");
                UsersServiceError::MalformedQuery
            })?;
        Ok(Self(value))
    }
}

/// Search, filters, ordering and pagination from the query string.
pub struct ListParams(pub ListQuery);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = UsersServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|_| UsersServiceError::MalformedQuery)?;
        Ok(Self(ListQuery::from_params(params)))
    }
}

//! Helpers shared by use cases: generated identifiers and validation messages.

use std::collections::BTreeMap;

use anyhow::anyhow;
use rand::RngExt;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::repository::UniquenessPort;
use crate::domain::types::UniqueField;
use crate::error::UsersServiceError;

/// Candidates tried before giving up on a unique value.
pub const MAX_UNIQUE_ATTEMPTS: usize = 10;

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub fn uuid_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn numeric_code(len: usize) -> String {
    random_string(DIGITS, len)
}

pub fn alphanumeric_code(len: usize) -> String {
    random_string(ALPHANUMERIC, len)
}

fn random_string(charset: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Draw candidates from `generate` until one is free in `field`.
pub async fn generate_unique<P, G>(
    port: &P,
    field: UniqueField,
    mut generate: G,
) -> Result<String, UsersServiceError>
where
    P: UniquenessPort,
    G: FnMut() -> String,
{
    for attempt in 1..=MAX_UNIQUE_ATTEMPTS {
        let candidate = generate();
        if !port.is_taken(field, &candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(?field, attempt, "generated value already taken");
    }
    Err(UsersServiceError::Internal(anyhow!(
        "no free {field:?} after {MAX_UNIQUE_ATTEMPTS} attempts"
    )))
}

/// First message per failing field, falling back to the validator code.
pub fn error_message_formatter(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), |m| m.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

pub fn validate<T: Validate>(value: &T) -> Result<(), UsersServiceError> {
    value
        .validate()
        .map_err(|e| UsersServiceError::Validation(error_message_formatter(&e)))
}

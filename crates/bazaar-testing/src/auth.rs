//! Identity helpers for router tests.
//!
//! The gateway authenticates the caller and forwards `x-bazaar-user-id`.
//! `MockAuth` produces that header directly so no gateway or JWT is needed.

use axum::http::{HeaderMap, HeaderValue};
use bazaar_auth_types::identity::X_BAZAAR_USER_ID;
use uuid::Uuid;

pub struct MockAuth {
    pub user_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn random() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Headers as the gateway would inject them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            X_BAZAAR_USER_ID,
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map
    }
}

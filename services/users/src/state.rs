use std::sync::Arc;

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAuthTokenRepository, DbDeliveryAddressRepository, DbGroupRepository,
    DbStaffSettingsRepository, DbUniqueness, DbUserRepository, DbWalletRepository,
};
use crate::infra::dispatch::LogTokenDispatch;
use crate::usecase::auth_token::{ConsumeAuthTokenUseCase, CreateAuthTokenUseCase};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub auth_token_ttl: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn group_repo(&self) -> DbGroupRepository {
        DbGroupRepository {
            db: self.db.clone(),
        }
    }

    pub fn auth_token_repo(&self) -> DbAuthTokenRepository {
        DbAuthTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn staff_repo(&self) -> DbStaffSettingsRepository {
        DbStaffSettingsRepository {
            db: self.db.clone(),
        }
    }

    pub fn address_repo(&self) -> DbDeliveryAddressRepository {
        DbDeliveryAddressRepository {
            db: self.db.clone(),
        }
    }

    pub fn wallet_repo(&self) -> DbWalletRepository {
        DbWalletRepository {
            db: self.db.clone(),
        }
    }

    pub fn uniqueness(&self) -> DbUniqueness {
        DbUniqueness {
            db: self.db.clone(),
        }
    }

    pub fn auth_token_issuer(
        &self,
    ) -> CreateAuthTokenUseCase<DbAuthTokenRepository, DbUniqueness, LogTokenDispatch> {
        CreateAuthTokenUseCase {
            tokens: self.auth_token_repo(),
            unique: self.uniqueness(),
            dispatch: LogTokenDispatch,
            ttl: self.auth_token_ttl,
        }
    }

    pub fn auth_token_consumer(&self) -> ConsumeAuthTokenUseCase<DbAuthTokenRepository> {
        ConsumeAuthTokenUseCase {
            tokens: self.auth_token_repo(),
        }
    }
}

use chrono::Utc;
use uuid::Uuid;

use bazaar_domain::pagination::{ListQuery, Page};
use bazaar_domain::user::{DisabilityType, StaffType};

use crate::domain::repository::{StaffSettingsRepository, UserRepository};
use crate::domain::types::{BankDetails, StaffSettings, UserLookup};
use crate::error::UsersServiceError;

// ── CreateStaff ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateStaffInput {
    pub user_id: Uuid,
    pub category: Option<StaffType>,
    pub staff_name: Option<String>,
    pub staff_type: Option<StaffType>,
    pub state: Option<String>,
    pub local_govt: Option<String>,
    pub address: String,
    pub disability: Option<DisabilityType>,
    pub image: Option<String>,
    pub bank: BankDetails,
}

/// Attaches a staff profile, switches the account to `STAFF` and grants the staff group.
pub struct CreateStaffUseCase<U: UserRepository, S: StaffSettingsRepository> {
    pub users: U,
    pub staff: S,
}

impl<U: UserRepository, S: StaffSettingsRepository> CreateStaffUseCase<U, S> {
    pub async fn execute(&self, input: CreateStaffInput) -> Result<StaffSettings, UsersServiceError> {
        let user = self
            .users
            .find(&UserLookup::Id(input.user_id))
            .await?
            .ok_or(UsersServiceError::UserNotFound)?;
        if self.staff.find_by_user_id(user.id).await?.is_some() {
            return Err(UsersServiceError::StaffSettingsAlreadyExists);
        }

        let now = Utc::now();
        let settings = StaffSettings {
            id: Uuid::now_v7(),
            user_id: user.id,
            category: input.category,
            staff_name: input.staff_name,
            staff_type: input.staff_type,
            state: input.state,
            local_govt: input.local_govt,
            address: input.address,
            disability: input.disability,
            image: input.image,
            bank: input.bank,
            created_at: now,
            updated_at: now,
        };
        self.staff.enroll(&settings).await?;

        tracing::info!(user_id = %user.id, staff_settings_id = %settings.id, "staff profile created");
        Ok(settings)
    }
}

// ── GetStaffSettings ─────────────────────────────────────────────────────────

pub struct GetStaffSettingsUseCase<S: StaffSettingsRepository> {
    pub staff: S,
}

impl<S: StaffSettingsRepository> GetStaffSettingsUseCase<S> {
    pub async fn execute(&self, id: Uuid) -> Result<StaffSettings, UsersServiceError> {
        self.staff
            .find_by_id(id)
            .await?
            .ok_or(UsersServiceError::StaffSettingsNotFound)
    }

    pub async fn execute_for_user(&self, user_id: Uuid) -> Result<StaffSettings, UsersServiceError> {
        self.staff
            .find_by_user_id(user_id)
            .await?
            .ok_or(UsersServiceError::StaffSettingsNotFound)
    }
}

// ── ListStaffSettings ────────────────────────────────────────────────────────

pub struct ListStaffSettingsUseCase<S: StaffSettingsRepository> {
    pub staff: S,
}

impl<S: StaffSettingsRepository> ListStaffSettingsUseCase<S> {
    pub async fn execute(&self, query: &ListQuery) -> Result<Page<StaffSettings>, UsersServiceError> {
        self.staff.list(query).await
    }
}

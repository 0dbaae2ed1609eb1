use uuid::Uuid;

use bazaar_domain::pagination::{ListQuery, Page};

use crate::domain::repository::DeliveryAddressRepository;
use crate::domain::types::{DeliveryAddress, DeliveryAddressPatch, NewDeliveryAddress};
use crate::error::UsersServiceError;

// ── ListAddresses ────────────────────────────────────────────────────────────

pub struct ListAddressesUseCase<R: DeliveryAddressRepository> {
    pub repo: R,
}

impl<R: DeliveryAddressRepository> ListAddressesUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<Page<DeliveryAddress>, UsersServiceError> {
        self.repo.list(user_id, query).await
    }
}

// ── GetAddress ───────────────────────────────────────────────────────────────

pub struct GetAddressUseCase<R: DeliveryAddressRepository> {
    pub repo: R,
}

impl<R: DeliveryAddressRepository> GetAddressUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, id: i32) -> Result<DeliveryAddress, UsersServiceError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(UsersServiceError::AddressNotFound)
    }
}

// ── CreateAddress ────────────────────────────────────────────────────────────

pub struct CreateAddressUseCase<R: DeliveryAddressRepository> {
    pub repo: R,
}

impl<R: DeliveryAddressRepository> CreateAddressUseCase<R> {
    pub async fn execute(
        &self,
        address: NewDeliveryAddress,
    ) -> Result<DeliveryAddress, UsersServiceError> {
        if address.location_name.trim().is_empty() {
            return Err(UsersServiceError::MissingData);
        }
        self.repo.create(&address).await
    }
}

// ── UpdateAddress ────────────────────────────────────────────────────────────

pub struct UpdateAddressUseCase<R: DeliveryAddressRepository> {
    pub repo: R,
}

impl<R: DeliveryAddressRepository> UpdateAddressUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        id: i32,
        patch: DeliveryAddressPatch,
    ) -> Result<DeliveryAddress, UsersServiceError> {
        let mut address = self
            .repo
            .find(user_id, id)
            .await?
            .ok_or(UsersServiceError::AddressNotFound)?;
        address.apply(patch);
        if address.location_name.trim().is_empty() {
            return Err(UsersServiceError::MissingData);
        }
        self.repo.update(&address).await?;
        Ok(address)
    }
}

// ── DeleteAddress ────────────────────────────────────────────────────────────

pub struct DeleteAddressUseCase<R: DeliveryAddressRepository> {
    pub repo: R,
}

impl<R: DeliveryAddressRepository> DeleteAddressUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, id: i32) -> Result<(), UsersServiceError> {
        if !self.repo.delete(user_id, id).await? {
            return Err(UsersServiceError::AddressNotFound);
        }
        Ok(())
    }
}

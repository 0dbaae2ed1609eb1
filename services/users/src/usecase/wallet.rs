use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::addon::{generate_unique, uuid_token};
use crate::domain::repository::{UniquenessPort, UserRepository, WalletRepository};
use crate::domain::types::{UniqueField, UserLookup, Wallet};
use crate::error::UsersServiceError;

// ── GetWallet ────────────────────────────────────────────────────────────────

pub struct GetWalletUseCase<W: WalletRepository> {
    pub wallets: W,
}

impl<W: WalletRepository> GetWalletUseCase<W> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Wallet, UsersServiceError> {
        self.wallets
            .find_by_user_id(user_id)
            .await?
            .ok_or(UsersServiceError::WalletNotFound)
    }
}

// ── CreateWallet ─────────────────────────────────────────────────────────────

/// Opens an empty wallet under a freshly generated identifier.
pub struct CreateWalletUseCase<U, W, Q>
where
    U: UserRepository,
    W: WalletRepository,
    Q: UniquenessPort,
{
    pub users: U,
    pub wallets: W,
    pub unique: Q,
}

impl<U, W, Q> CreateWalletUseCase<U, W, Q>
where
    U: UserRepository,
    W: WalletRepository,
    Q: UniquenessPort,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<Wallet, UsersServiceError> {
        if !self.users.exists(&UserLookup::Id(user_id)).await? {
            return Err(UsersServiceError::UserNotFound);
        }
        if self.wallets.find_by_user_id(user_id).await?.is_some() {
            return Err(UsersServiceError::WalletAlreadyExists);
        }

        let identifier =
            generate_unique(&self.unique, UniqueField::WalletIdentifier, uuid_token).await?;
        let now = Utc::now();
        let wallet = Wallet {
            id: Uuid::now_v7(),
            identifier,
            user_id,
            amount: Decimal::ZERO,
            ledger_balance: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        self.wallets.create(&wallet).await?;
        tracing::info!(%user_id, wallet_id = %wallet.id, "wallet created");
        Ok(wallet)
    }
}

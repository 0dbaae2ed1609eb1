use axum::extract::State;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use bazaar_auth_types::identity::IdentityHeaders;
use bazaar_core::response::ApiResponse;

use crate::domain::types::Wallet;
use crate::error::UsersServiceError;
use crate::state::AppState;
use crate::usecase::wallet::{CreateWalletUseCase, GetWalletUseCase};

#[derive(Serialize)]
pub struct WalletResponse {
    pub id: Uuid,
    pub identifier: String,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub ledger_balance: Decimal,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "bazaar_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(w: Wallet) -> Self {
        Self {
            id: w.id,
            identifier: w.identifier,
            user_id: w.user_id,
            amount: w.amount,
            ledger_balance: w.ledger_balance,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

// ── GET /users/@me/wallet ────────────────────────────────────────────────────

pub async fn get_wallet(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<ApiResponse<WalletResponse>, UsersServiceError> {
    let usecase = GetWalletUseCase {
        wallets: state.wallet_repo(),
    };
    let wallet = usecase.execute(identity.user_id).await?;
    Ok(ApiResponse::ok(wallet.into()))
}

// ── POST /users/@me/wallet ───────────────────────────────────────────────────

pub async fn create_wallet(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<ApiResponse<WalletResponse>, UsersServiceError> {
    let usecase = CreateWalletUseCase {
        users: state.user_repo(),
        wallets: state.wallet_repo(),
        unique: state.uniqueness(),
    };
    let wallet = usecase.execute(identity.user_id).await?;
    Ok(ApiResponse::created(wallet.into()))
}

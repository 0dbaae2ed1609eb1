use rust_decimal::Decimal;
use uuid::Uuid;

use bazaar_users::domain::types::UniqueField;
use bazaar_users::error::UsersServiceError;
use bazaar_users::usecase::wallet::{CreateWalletUseCase, GetWalletUseCase};

use crate::helpers::{MockUniqueness, MockUserRepo, MockWalletRepo, test_user};

#[tokio::test]
async fn should_open_empty_wallet_with_unique_identifier() {
    let user = test_user();
    let wallets = MockWalletRepo::empty();
    let wallets_handle = wallets.wallets_handle();
    let unique = MockUniqueness::free();
    let checked = unique.checked_handle();

    let uc = CreateWalletUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        wallets,
        unique,
    };
    let wallet = uc.execute(user.id).await.unwrap();

    assert_eq!(wallet.user_id, user.id);
    assert_eq!(wallet.amount, Decimal::ZERO);
    assert_eq!(wallet.ledger_balance, Decimal::ZERO);
    assert!(Uuid::parse_str(&wallet.identifier).is_ok());
    assert_eq!(wallets_handle.lock().unwrap().len(), 1);
    assert_eq!(
        checked.lock().unwrap().as_slice(),
        &[(UniqueField::WalletIdentifier, wallet.identifier.clone())]
    );
}

#[tokio::test]
async fn should_open_one_wallet_per_user() {
    let user = test_user();
    let uc = CreateWalletUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        wallets: MockWalletRepo::empty(),
        unique: MockUniqueness::free(),
    };
    uc.execute(user.id).await.unwrap();

    let result = uc.execute(user.id).await;
    assert!(
        matches!(result, Err(UsersServiceError::WalletAlreadyExists)),
        "expected WalletAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_report_conflict_when_wallet_was_opened_concurrently() {
    let user = test_user();
    let wallets = MockWalletRepo::stale();
    let wallets_handle = wallets.wallets_handle();
    let uc = CreateWalletUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        wallets,
        unique: MockUniqueness::free(),
    };
    uc.execute(user.id).await.unwrap();

    let result = uc.execute(user.id).await;
    assert!(
        matches!(result, Err(UsersServiceError::WalletAlreadyExists)),
        "expected WalletAlreadyExists, got {result:?}"
    );
    assert_eq!(wallets_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_open_wallet_for_unknown_user() {
    let uc = CreateWalletUseCase {
        users: MockUserRepo::empty(),
        wallets: MockWalletRepo::empty(),
        unique: MockUniqueness::free(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(UsersServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_report_missing_wallet() {
    let uc = GetWalletUseCase {
        wallets: MockWalletRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(UsersServiceError::WalletNotFound)));
}

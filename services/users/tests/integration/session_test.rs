use bazaar_auth_types::token::validate_access_token;
use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};

use bazaar_users::domain::types::MAX_PENDING_TOKENS;
use bazaar_users::error::UsersServiceError;
use bazaar_users::usecase::auth_token::DeleteAuthTokenUseCase;
use bazaar_users::usecase::session::{LoginUseCase, RequestLoginCodeUseCase};

use crate::helpers::{
    JWT_SECRET, MockDispatch, MockGroupRepo, MockTokenRepo, MockUserRepo, consumer, issuer,
    pending_token, test_user,
};

#[tokio::test]
async fn should_issue_login_code_for_active_user() {
    let user = test_user();
    let tokens = MockTokenRepo::empty();
    let tokens_handle = tokens.tokens_handle();

    let uc = RequestLoginCodeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        issuer: issuer(tokens, MockDispatch::ok()),
    };
    let token = uc.execute(&user.mobile).await.unwrap();

    assert_eq!(token.user_id, user.id);
    assert_eq!(token.token_type, AuthTokenType::LoginToken);
    assert_eq!(tokens_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_issue_login_code_for_inactive_or_unknown_user() {
    let mut user = test_user();
    user.is_active = false;
    let uc = RequestLoginCodeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        issuer: issuer(MockTokenRepo::empty(), MockDispatch::ok()),
    };

    for mobile in [user.mobile.as_str(), "07000000000"] {
        let result = uc.execute(mobile).await;
        assert!(
            matches!(result, Err(UsersServiceError::UserNotFound)),
            "expected UserNotFound, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_limit_pending_codes_per_type() {
    let user = test_user();
    let existing: Vec<_> = (0..MAX_PENDING_TOKENS)
        .map(|i| pending_token(user.id, AuthTokenType::LoginToken, &format!("10000{i}")))
        .collect();
    let tokens = MockTokenRepo::new(existing);
    let tokens_handle = tokens.tokens_handle();

    let uc = RequestLoginCodeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        issuer: issuer(tokens, MockDispatch::ok()),
    };
    let result = uc.execute(&user.mobile).await;
    assert!(
        matches!(result, Err(UsersServiceError::TooManyAuthTokens)),
        "expected TooManyAuthTokens, got {result:?}"
    );

    // Spending one frees a slot.
    tokens_handle.lock().unwrap()[0].status = AuthTokenStatus::Used;
    assert!(uc.execute(&user.mobile).await.is_ok());
}

#[tokio::test]
async fn should_remove_token_when_dispatch_fails() {
    let user = test_user();
    let tokens = MockTokenRepo::empty();
    let tokens_handle = tokens.tokens_handle();

    let uc = RequestLoginCodeUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        issuer: issuer(tokens, MockDispatch::failing()),
    };
    let result = uc.execute(&user.mobile).await;

    assert!(matches!(result, Err(UsersServiceError::Internal(_))));
    assert!(tokens_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_log_in_with_code_and_sign_groups_into_token() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let users_handle = users.users_handle();
    let tokens = MockTokenRepo::new(vec![pending_token(
        user.id,
        AuthTokenType::LoginToken,
        "654321",
    )]);

    let uc = LoginUseCase {
        users,
        groups: MockGroupRepo::new(vec![(user.id, "staff")]),
        tokens: consumer(tokens),
        jwt_secret: JWT_SECRET.to_owned(),
    };
    let out = uc.execute(&user.mobile, "654321").await.unwrap();

    assert!(!out.profile.user.first_login);
    assert!(!users_handle.lock().unwrap()[0].first_login);
    assert_eq!(out.profile.group(), "staff");

    let info = validate_access_token(&out.access_token, JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.groups, vec!["staff".to_owned()]);
    assert_eq!(info.access_token_exp, out.access_token_exp);

    // The code is spent.
    let again = uc.execute(&user.mobile, "654321").await;
    assert!(matches!(again, Err(UsersServiceError::InvalidAuthToken)));
}

#[tokio::test]
async fn should_not_log_in_with_verification_code() {
    let user = test_user();
    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        groups: MockGroupRepo::empty(),
        tokens: consumer(MockTokenRepo::new(vec![pending_token(
            user.id,
            AuthTokenType::NumberVerification,
            "777777",
        )])),
        jwt_secret: JWT_SECRET.to_owned(),
    };
    let result = uc.execute(&user.mobile, "777777").await;
    assert!(matches!(result, Err(UsersServiceError::InvalidAuthToken)));
}

#[tokio::test]
async fn should_delete_first_matching_token_only() {
    let user = test_user();
    let tokens = MockTokenRepo::new(vec![
        pending_token(user.id, AuthTokenType::LoginToken, "111111"),
        pending_token(user.id, AuthTokenType::LoginToken, "222222"),
    ]);
    let tokens_handle = tokens.tokens_handle();
    let uc = DeleteAuthTokenUseCase { tokens };

    let filter = bazaar_users::domain::types::AuthTokenFilter {
        user_id: Some(user.id),
        token_type: Some(AuthTokenType::LoginToken),
        token: None,
    };
    assert!(uc.execute(&filter).await.unwrap());
    assert_eq!(tokens_handle.lock().unwrap().len(), 1);

    let missing = bazaar_users::domain::types::AuthTokenFilter {
        token: Some("999999".into()),
        ..Default::default()
    };
    assert!(!uc.execute(&missing).await.unwrap());
}

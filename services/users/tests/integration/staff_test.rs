use bazaar_domain::user::{StaffType, UserType};

use bazaar_users::domain::types::BankDetails;
use bazaar_users::error::UsersServiceError;
use bazaar_users::usecase::staff::{
    CreateStaffInput, CreateStaffUseCase, GetStaffSettingsUseCase,
};

use crate::helpers::{MockGroupRepo, MockStaffRepo, MockUserRepo, test_user};

fn staff_input(user_id: uuid::Uuid) -> CreateStaffInput {
    CreateStaffInput {
        user_id,
        category: Some(StaffType::Manager),
        staff_name: Some("Ada Obi".to_owned()),
        staff_type: Some(StaffType::BarTender),
        state: Some("Lagos".to_owned()),
        local_govt: Some("Ikeja".to_owned()),
        address: "12 Allen Avenue".to_owned(),
        disability: None,
        image: None,
        bank: BankDetails {
            account_number: Some("0123456789".to_owned()),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn should_create_staff_profile_and_promote_user() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let users_handle = users.users_handle();
    let groups = MockGroupRepo::empty();
    let memberships = groups.memberships_handle();
    let staff = MockStaffRepo::enrolling(&users, &groups);
    let settings_handle = staff.settings_handle();

    let uc = CreateStaffUseCase { users, staff };
    let settings = uc.execute(staff_input(user.id)).await.unwrap();

    assert_eq!(settings.user_id, user.id);
    assert_eq!(settings.staff_type, Some(StaffType::BarTender));
    assert_eq!(settings_handle.lock().unwrap().len(), 1);
    assert_eq!(users_handle.lock().unwrap()[0].user_type, UserType::Staff);
    assert_eq!(
        memberships.lock().unwrap().as_slice(),
        &[(user.id, "staff".to_owned())]
    );
}

#[tokio::test]
async fn should_leave_user_untouched_when_enrollment_fails() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let users_handle = users.users_handle();
    let groups = MockGroupRepo::empty();
    let memberships = groups.memberships_handle();
    let staff = MockStaffRepo::failing(&users, &groups);
    let settings_handle = staff.settings_handle();

    let uc = CreateStaffUseCase { users, staff };
    let result = uc.execute(staff_input(user.id)).await;

    assert!(matches!(result, Err(UsersServiceError::Internal(_))));
    assert!(settings_handle.lock().unwrap().is_empty());
    assert_eq!(users_handle.lock().unwrap()[0].user_type, UserType::Customer);
    assert!(memberships.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_second_staff_profile() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let staff = MockStaffRepo::enrolling(&users, &MockGroupRepo::empty());
    let uc = CreateStaffUseCase { users, staff };
    uc.execute(staff_input(user.id)).await.unwrap();

    let result = uc.execute(staff_input(user.id)).await;
    assert!(
        matches!(result, Err(UsersServiceError::StaffSettingsAlreadyExists)),
        "expected StaffSettingsAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_staff_profile_for_unknown_user() {
    let uc = CreateStaffUseCase {
        users: MockUserRepo::empty(),
        staff: MockStaffRepo::empty(),
    };
    let result = uc.execute(staff_input(uuid::Uuid::now_v7())).await;
    assert!(matches!(result, Err(UsersServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_fetch_staff_profile_by_id_or_user() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let staff = MockStaffRepo::enrolling(&users, &MockGroupRepo::empty());
    let create = CreateStaffUseCase {
        users,
        staff: staff.clone(),
    };
    let created = create.execute(staff_input(user.id)).await.unwrap();

    let get = GetStaffSettingsUseCase { staff };
    assert_eq!(get.execute(created.id).await.unwrap(), created);
    assert_eq!(get.execute_for_user(user.id).await.unwrap(), created);

    let missing = get.execute_for_user(uuid::Uuid::now_v7()).await;
    assert!(matches!(missing, Err(UsersServiceError::StaffSettingsNotFound)));
}

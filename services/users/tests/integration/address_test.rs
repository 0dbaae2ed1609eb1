use uuid::Uuid;

use bazaar_domain::pagination::ListQuery;

use bazaar_users::domain::types::{DeliveryAddressPatch, NewDeliveryAddress};
use bazaar_users::error::UsersServiceError;
use bazaar_users::usecase::address::{
    CreateAddressUseCase, DeleteAddressUseCase, GetAddressUseCase, ListAddressesUseCase,
    UpdateAddressUseCase,
};

use crate::helpers::MockAddressRepo;

fn new_address(user_id: Uuid, location_name: &str) -> NewDeliveryAddress {
    NewDeliveryAddress {
        user_id,
        location_name: location_name.to_owned(),
        address: "5 Marina Road".to_owned(),
        zip_code: None,
        city: Some("Lagos".to_owned()),
        state: Some("Lagos".to_owned()),
        phone_number: None,
        is_default_address: false,
    }
}

#[tokio::test]
async fn should_create_and_list_own_addresses_newest_first() {
    let user_id = Uuid::now_v7();
    let repo = MockAddressRepo::empty();
    let create = CreateAddressUseCase { repo: repo.clone() };
    create.execute(new_address(user_id, "Home")).await.unwrap();
    create.execute(new_address(user_id, "Office")).await.unwrap();
    create
        .execute(new_address(Uuid::now_v7(), "Elsewhere"))
        .await
        .unwrap();

    let list = ListAddressesUseCase { repo };
    let page = list
        .execute(user_id, &ListQuery::from_params([("per-page", "1")]))
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.per_page, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].location_name, "Office");
}

#[tokio::test]
async fn should_require_location_name() {
    let uc = CreateAddressUseCase {
        repo: MockAddressRepo::empty(),
    };
    let result = uc.execute(new_address(Uuid::now_v7(), "  ")).await;
    assert!(matches!(result, Err(UsersServiceError::MissingData)));
}

#[tokio::test]
async fn should_update_only_given_fields() {
    let user_id = Uuid::now_v7();
    let repo = MockAddressRepo::empty();
    let created = CreateAddressUseCase { repo: repo.clone() }
        .execute(new_address(user_id, "Home"))
        .await
        .unwrap();

    let uc = UpdateAddressUseCase { repo: repo.clone() };
    let updated = uc
        .execute(
            user_id,
            created.id,
            DeliveryAddressPatch {
                is_default_address: Some(true),
                phone_number: Some("08012345678".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.is_default_address);
    assert_eq!(updated.location_name, "Home");
    assert_eq!(
        repo.addresses_handle().lock().unwrap()[0].phone_number.as_deref(),
        Some("08012345678")
    );
}

#[tokio::test]
async fn should_hide_other_users_addresses() {
    let owner = Uuid::now_v7();
    let repo = MockAddressRepo::empty();
    let created = CreateAddressUseCase { repo: repo.clone() }
        .execute(new_address(owner, "Home"))
        .await
        .unwrap();

    let stranger = Uuid::now_v7();
    let get = GetAddressUseCase { repo: repo.clone() };
    assert!(matches!(
        get.execute(stranger, created.id).await,
        Err(UsersServiceError::AddressNotFound)
    ));

    let delete = DeleteAddressUseCase { repo: repo.clone() };
    assert!(matches!(
        delete.execute(stranger, created.id).await,
        Err(UsersServiceError::AddressNotFound)
    ));
    assert_eq!(repo.addresses_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_own_address() {
    let owner = Uuid::now_v7();
    let repo = MockAddressRepo::empty();
    let created = CreateAddressUseCase { repo: repo.clone() }
        .execute(new_address(owner, "Home"))
        .await
        .unwrap();

    DeleteAddressUseCase { repo: repo.clone() }
        .execute(owner, created.id)
        .await
        .unwrap();
    assert!(repo.addresses_handle().lock().unwrap().is_empty());
}

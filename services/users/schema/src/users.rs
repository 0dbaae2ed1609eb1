use sea_orm::entity::prelude::*;

/// Account record. `user_type`, `gender` and `marital_status` hold choice values.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(column_name = "type")]
    pub user_type: i16,
    #[sea_orm(unique)]
    pub mobile: String,
    pub email: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub address: String,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub newsletter: bool,
    pub is_confirmed: bool,
    pub first_login: bool,
    pub is_active: bool,
    pub secret_key: Option<String>,
    pub public_key: Option<String>,
    #[sea_orm(unique)]
    pub referral_code: Option<String>,
    pub date_joined: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_tokens::Entity")]
    AuthTokens,
    #[sea_orm(has_one = "super::staff_settings::Entity")]
    StaffSettings,
    #[sea_orm(has_many = "super::delivery_addresses::Entity")]
    DeliveryAddresses,
    #[sea_orm(has_one = "super::wallets::Entity")]
    Wallet,
    #[sea_orm(has_many = "super::user_groups::Entity")]
    Groups,
}

impl Related<super::auth_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthTokens.def()
    }
}

impl Related<super::staff_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffSettings.def()
    }
}

impl Related<super::delivery_addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryAddresses.def()
    }
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl Related<super::user_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::prelude::*;

mod choice;
mod m20250301_000001_create_users;
mod m20250301_000002_create_user_groups;
mod m20250301_000003_create_auth_tokens;
mod m20250301_000004_create_staff_settings;
mod m20250301_000005_create_delivery_addresses;
mod m20250301_000006_create_wallets;
mod m20250301_000007_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_user_groups::Migration),
            Box::new(m20250301_000003_create_auth_tokens::Migration),
            Box::new(m20250301_000004_create_staff_settings::Migration),
            Box::new(m20250301_000005_create_delivery_addresses::Migration),
            Box::new(m20250301_000006_create_wallets::Migration),
            Box::new(m20250301_000007_add_lookup_indexes::Migration),
        ]
    }
}

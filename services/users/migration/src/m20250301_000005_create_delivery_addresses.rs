use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliveryAddresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeliveryAddresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeliveryAddresses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(DeliveryAddresses::LocationName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAddresses::Address)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(DeliveryAddresses::ZipCode).string_len(255).null())
                    .col(ColumnDef::new(DeliveryAddresses::City).string_len(255).null())
                    .col(ColumnDef::new(DeliveryAddresses::State).string_len(255).null())
                    .col(ColumnDef::new(DeliveryAddresses::PhoneNumber).string_len(255).null())
                    .col(
                        ColumnDef::new(DeliveryAddresses::IsDefaultAddress)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DeliveryAddresses::Table, DeliveryAddresses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliveryAddresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DeliveryAddresses {
    Table,
    Id,
    UserId,
    LocationName,
    Address,
    ZipCode,
    City,
    State,
    PhoneNumber,
    IsDefaultAddress,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

use bazaar_domain::user::{DisabilityType, StaffType};
use sea_orm_migration::prelude::*;

use crate::choice::choice_check;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffSettings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StaffSettings::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(StaffSettings::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        choice_check::<StaffType, _>(StaffSettings::Category)
                            .string_len(200)
                            .null(),
                    )
                    .col(ColumnDef::new(StaffSettings::StaffName).string_len(255).null())
                    .col(
                        choice_check::<StaffType, _>(StaffSettings::Type)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(StaffSettings::State).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::LocalGovt).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::Address).text().not_null().default(""))
                    .col(
                        choice_check::<DisabilityType, _>(StaffSettings::Disability)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(StaffSettings::Image).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::BankCode).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::BankName).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::AccountNumber).string_len(255).null())
                    .col(ColumnDef::new(StaffSettings::AccountName).string_len(255).null())
                    .col(
                        ColumnDef::new(StaffSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(StaffSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StaffSettings::Table, StaffSettings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone)]
enum StaffSettings {
    Table,
    Id,
    UserId,
    Category,
    StaffName,
    Type,
    State,
    LocalGovt,
    Address,
    Disability,
    Image,
    BankCode,
    BankName,
    AccountNumber,
    AccountName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

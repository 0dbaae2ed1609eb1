use bazaar_domain::user::{GenderType, MaritalType, UserType};
use sea_orm_migration::prelude::*;

use crate::choice::{choice_check, choice_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string_len(150).not_null().default(""))
                    .col(ColumnDef::new(Users::LastName).string_len(150).not_null().default(""))
                    .col(choice_column::<UserType, _>(Users::Type).small_integer().not_null())
                    .col(
                        ColumnDef::new(Users::Mobile)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string_len(255).null())
                    .col(ColumnDef::new(Users::State).string_len(255).null())
                    .col(ColumnDef::new(Users::City).string_len(255).null())
                    .col(ColumnDef::new(Users::ZipCode).string_len(255).null())
                    .col(ColumnDef::new(Users::Town).string_len(255).null())
                    .col(ColumnDef::new(Users::Address).text().not_null().default(""))
                    .col(choice_check::<GenderType, _>(Users::Gender).string_len(255).null())
                    .col(
                        choice_check::<MaritalType, _>(Users::MaritalStatus)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(Users::Newsletter).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::IsConfirmed).boolean().not_null().default(false))
                    .col(ColumnDef::new(Users::FirstLogin).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::SecretKey).string_len(255).null())
                    .col(ColumnDef::new(Users::PublicKey).string_len(255).null())
                    .col(
                        ColumnDef::new(Users::ReferralCode)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone)]
enum Users {
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Type,
    Mobile,
    Email,
    State,
    City,
    ZipCode,
    Town,
    Address,
    Gender,
    MaritalStatus,
    Newsletter,
    IsConfirmed,
    FirstLogin,
    IsActive,
    SecretKey,
    PublicKey,
    ReferralCode,
    DateJoined,
    UpdatedAt,
}

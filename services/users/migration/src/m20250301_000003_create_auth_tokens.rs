use bazaar_domain::auth_token::{AuthTokenStatus, AuthTokenType};
use sea_orm_migration::prelude::*;

use crate::choice::choice_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthTokens::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuthTokens::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AuthTokens::UserId).uuid().not_null())
                    .col(
                        choice_column::<AuthTokenType, _>(AuthTokens::Type)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuthTokens::Token).string_len(255).not_null())
                    .col(
                        choice_column::<AuthTokenStatus, _>(AuthTokens::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AuthTokens::Expiry)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AuthTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AuthTokens::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AuthTokens::Table, AuthTokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthTokens::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone)]
enum AuthTokens {
    Table,
    Id,
    UserId,
    Type,
    Token,
    Status,
    Expiry,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

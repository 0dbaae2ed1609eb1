use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(AuthTokens::Table)
                    .col(AuthTokens::UserId)
                    .col(AuthTokens::Type)
                    .col(AuthTokens::Status)
                    .name("idx_auth_tokens_user_id_type_status")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(AuthTokens::Table)
                    .col(AuthTokens::Token)
                    .name("idx_auth_tokens_token")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(DeliveryAddresses::Table)
                    .col(DeliveryAddresses::UserId)
                    .name("idx_delivery_addresses_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_delivery_addresses_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_auth_tokens_token").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_auth_tokens_user_id_type_status")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum AuthTokens {
    Table,
    UserId,
    Type,
    Status,
    Token,
}

#[derive(Iden)]
enum DeliveryAddresses {
    Table,
    UserId,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_user::User;

static IDX_ACCOUNT_USER_ID: &str = "idx-account-user_id";
static FK_ACCOUNT_USER_ID: &str = "fk-account-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so it is declared inline
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::AccountId))
                    .col(string(Account::ProviderId))
                    .col(integer(Account::UserId))
                    .col(text_null(Account::Password))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp(Account::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_USER_ID)
                            .from(Account::Table, Account::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_USER_ID)
                    .table(Account::Table)
                    .col(Account::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_USER_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    AccountId,
    ProviderId,
    UserId,
    Password,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::IdClient))
                    .col(string_len(Client::FirstName, 100))
                    .col(string_len(Client::LastName, 100))
                    .col(string_len(Client::Email, 100))
                    .col(string_len(Client::Telephone, 15))
                    .col(string_len_uniq(Client::Pesel, 11))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    IdClient,
    FirstName,
    LastName,
    Email,
    Telephone,
    Pesel,
}

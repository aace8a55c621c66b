use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Court::Table)
                    .if_not_exists()
                    .col(pk_auto(Court::Id))
                    .col(string_uniq(Court::Name))
                    .col(string(Court::Surface).default("Cemento"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Court::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Court {
    Table,
    Id,
    Name,
    Surface,
}

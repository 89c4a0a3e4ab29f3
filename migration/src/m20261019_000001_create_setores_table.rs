use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setores::Table)
                    .if_not_exists()
                    .col(pk_auto(Setores::Id))
                    .col(string(Setores::Nome))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Setores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setores {
    Table,
    Id,
    Nome,
}

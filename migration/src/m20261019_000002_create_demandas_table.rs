use sea_orm_migration::{prelude::*, schema::*};

/// Status every demand starts in; the API never writes it on insert.
const DEFAULT_STATUS: &str = "Recebida";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // id_setor intentionally carries no foreign key, sector existence is
        // checked by the service before reassignment.
        manager
            .create_table(
                Table::create()
                    .table(Demandas::Table)
                    .if_not_exists()
                    .col(pk_auto(Demandas::Id))
                    .col(string(Demandas::Titulo))
                    .col(text(Demandas::Descricao))
                    .col(string(Demandas::Tipo))
                    .col(string_len(Demandas::Protocolo, 32))
                    .col(string_len(Demandas::Status, 32).default(DEFAULT_STATUS))
                    .col(integer_null(Demandas::IdUsuario))
                    .col(integer_null(Demandas::IdSetor))
                    .col(timestamp(Demandas::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_demandas_status_tipo")
                    .table(Demandas::Table)
                    .col(Demandas::Status)
                    .col(Demandas::Tipo)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Demandas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Demandas {
    Table,
    Id,
    Titulo,
    Descricao,
    Tipo,
    Protocolo,
    Status,
    IdUsuario,
    IdSetor,
    CreatedAt,
}

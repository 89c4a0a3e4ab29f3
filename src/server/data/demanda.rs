use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::demanda::{CreateDemandaParams, DemandaStatus, ListDemandasParams};

pub struct DemandaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemandaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new demand with the given protocol number.
    ///
    /// `status` and `created_at` are left to the storage defaults.
    pub async fn create(
        &self,
        params: CreateDemandaParams,
        protocolo: String,
    ) -> Result<entity::demanda::Model, DbErr> {
        entity::demanda::ActiveModel {
            titulo: ActiveValue::Set(params.titulo),
            descricao: ActiveValue::Set(params.descricao),
            tipo: ActiveValue::Set(params.tipo),
            protocolo: ActiveValue::Set(protocolo),
            id_usuario: ActiveValue::Set(params.id_usuario),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets one page of demands matching the filters, newest id first, together with
    /// the number of rows matching the same filters.
    ///
    /// `params.page` is 1-based.
    pub async fn get_paginated(
        &self,
        params: &ListDemandasParams,
    ) -> Result<(Vec<entity::demanda::Model>, u64), DbErr> {
        let paginator = entity::prelude::Demanda::find()
            .filter(Self::filter_condition(params))
            .order_by_desc(entity::demanda::Column::Id)
            .paginate(self.db, params.page_size);

        let total = paginator.num_items().await?;
        let demandas = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((demandas, total))
    }

    /// Sets the status of a demand.
    ///
    /// Returns the number of rows matched, 0 when no demand has this id.
    pub async fn update_status(&self, id: i32, status: DemandaStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Demanda::update_many()
            .col_expr(entity::demanda::Column::Status, Expr::value(status.as_str()))
            .filter(entity::demanda::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Assigns a sector and forces the status to "Em análise" in one statement.
    ///
    /// Returns the number of rows matched.
    pub async fn assign_setor(&self, id: i32, id_setor: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Demanda::update_many()
            .col_expr(entity::demanda::Column::IdSetor, Expr::value(id_setor))
            .col_expr(
                entity::demanda::Column::Status,
                Expr::value(DemandaStatus::EmAnalise.as_str()),
            )
            .filter(entity::demanda::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a demand with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Demanda::find()
            .filter(entity::demanda::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a demand by id
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::demanda::Model>, DbErr> {
        entity::prelude::Demanda::find_by_id(id).one(self.db).await
    }

    /// Builds the AND of whichever filters are present. `search` matches
    /// `titulo` OR `descricao` by substring.
    fn filter_condition(params: &ListDemandasParams) -> Condition {
        Condition::all()
            .add_option(
                params
                    .status
                    .as_deref()
                    .map(|status| entity::demanda::Column::Status.eq(status)),
            )
            .add_option(
                params
                    .tipo
                    .as_deref()
                    .map(|tipo| entity::demanda::Column::Tipo.eq(tipo)),
            )
            .add_option(params.search.as_deref().map(|search| {
                Condition::any()
                    .add(entity::demanda::Column::Titulo.contains(search))
                    .add(entity::demanda::Column::Descricao.contains(search))
            }))
    }
}

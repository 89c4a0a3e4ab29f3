use chrono::{DateTime, Datelike, Local};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{demanda::DemandaRepository, setor::SetorRepository},
    error::AppError,
    model::demanda::{
        CreateDemandaParams, Demanda, EncaminharParams, ListDemandasParams, PaginatedDemandas,
        UpdateStatusParams,
    },
};

pub const NOT_FOUND_MESSAGE: &str = "Demanda não encontrada";
pub const INVALID_SETOR_MESSAGE: &str = "id_setor inválido (setor não existe)";

pub struct DemandaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemandaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new demand and assigns its protocol number
    ///
    /// # Arguments
    /// - `params`: Validated creation data
    ///
    /// # Returns
    /// - `Ok(Demanda)`: The stored demand, status set by the storage default
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateDemandaParams) -> Result<Demanda, AppError> {
        let repo = DemandaRepository::new(self.db);

        let protocolo = Self::generate_protocolo(Local::now());

        let demanda = repo.create(params, protocolo).await?;

        tracing::info!(id = demanda.id, protocolo = %demanda.protocolo, "Demanda registrada");

        Ok(Demanda::from_entity(demanda)?)
    }

    /// Gets one page of demands plus the total matching the same filters
    pub async fn list(&self, params: ListDemandasParams) -> Result<PaginatedDemandas, AppError> {
        let repo = DemandaRepository::new(self.db);

        let (demandas, total) = repo.get_paginated(&params).await?;

        let demandas: Result<Vec<_>, _> = demandas.into_iter().map(Demanda::from_entity).collect();

        Ok(PaginatedDemandas {
            demandas: demandas?,
            total,
            page: params.page,
            page_size: params.page_size,
        })
    }

    /// Sets a demand's status
    ///
    /// Any status may follow any other.
    ///
    /// # Returns
    /// - `Ok(())`: Status stored
    /// - `Err(AppError::NotFound)`: No demand with this id
    /// - `Err(AppError)`: Database error
    pub async fn update_status(&self, params: UpdateStatusParams) -> Result<(), AppError> {
        let repo = DemandaRepository::new(self.db);

        let affected = repo
            .update_status(stored_id(params.id)?, params.status)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    /// Routes a demand to a sector, forcing its status to "Em análise"
    ///
    /// The demand is checked first, then the sector. The checks and the update are
    /// separate statements with no transaction around them.
    ///
    /// # Returns
    /// - `Ok(())`: Sector and status stored
    /// - `Err(AppError::NotFound)`: No demand with this id
    /// - `Err(AppError::BadRequest)`: No sector with this id
    /// - `Err(AppError)`: Database error
    pub async fn encaminhar(&self, params: EncaminharParams) -> Result<(), AppError> {
        let repo = DemandaRepository::new(self.db);

        let id = stored_id(params.id)?;
        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        if !SetorRepository::new(self.db).exists(params.id_setor).await? {
            return Err(AppError::BadRequest(INVALID_SETOR_MESSAGE.to_string()));
        }

        repo.assign_setor(id, params.id_setor).await?;

        tracing::info!(id, id_setor = params.id_setor, "Demanda encaminhada");

        Ok(())
    }

    /// Builds a protocol number `AG-<year>-<last 6 digits of epoch millis>`.
    ///
    /// Two creations whose millisecond timestamps share the last six digits get the
    /// same number; nothing enforces uniqueness.
    pub fn generate_protocolo(now: DateTime<Local>) -> String {
        let millis = now.timestamp_millis().rem_euclid(1_000_000);

        format!("AG-{}-{:06}", now.year(), millis)
    }
}

/// Narrows a path id to the storage id type. Ids outside it cannot match a row.
fn stored_id(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

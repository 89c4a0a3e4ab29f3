//! Demand domain models and parameters.
//!
//! Holds the fixed status enumeration, validated parameter types for each demand
//! operation, and the domain model read back from storage.

use chrono::NaiveDateTime;
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::{
    model::demanda::{CreateDemandaDto, DemandaDto, PaginatedDemandasDto},
    server::error::AppError,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios: titulo, descricao, tipo";
pub const INVALID_STATUS_MESSAGE: &str = "Status inválido";
pub const MISSING_SETOR_MESSAGE: &str = "id_setor é obrigatório";

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page whose row offset still fits a signed 64-bit SQL bind.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Lifecycle stage of a demand.
///
/// There is no transition graph: any status may follow any other. Reassigning a
/// demand to a sector forces `EmAnalise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemandaStatus {
    Recebida,
    EmAnalise,
    EmAndamento,
    Concluida,
}

impl DemandaStatus {
    pub const ALL: [DemandaStatus; 4] = [
        DemandaStatus::Recebida,
        DemandaStatus::EmAnalise,
        DemandaStatus::EmAndamento,
        DemandaStatus::Concluida,
    ];

    /// Stored and wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandaStatus::Recebida => "Recebida",
            DemandaStatus::EmAnalise => "Em análise",
            DemandaStatus::EmAndamento => "Em andamento",
            DemandaStatus::Concluida => "Concluída",
        }
    }
}

impl fmt::Display for DemandaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown demand status '{}'", self.0)
    }
}

impl FromStr for DemandaStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match against the four stored values.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DemandaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Validated input for creating a demand.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDemandaParams {
    pub titulo: String,
    pub descricao: String,
    pub tipo: String,
    pub id_usuario: Option<i32>,
}

impl CreateDemandaParams {
    /// Validates a creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateDemandaParams)` - All of `titulo`, `descricao`, `tipo` present and non-empty
    /// - `Err(AppError::BadRequest)` - Any required field missing or empty
    pub fn from_dto(dto: CreateDemandaDto) -> Result<Self, AppError> {
        fn required(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (
            required(dto.titulo),
            required(dto.descricao),
            required(dto.tipo),
        ) {
            (Some(titulo), Some(descricao), Some(tipo)) => Ok(Self {
                titulo,
                descricao,
                tipo,
                id_usuario: dto.id_usuario,
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Validated listing parameters: 1-based page, clamped page size and optional filters.
///
/// Filters are combined with AND. Empty filter strings count as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDemandasParams {
    pub page: u64,
    pub page_size: u64,
    pub status: Option<String>,
    pub tipo: Option<String>,
    pub search: Option<String>,
}

impl Default for ListDemandasParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
            tipo: None,
            search: None,
        }
    }
}

impl ListDemandasParams {
    /// Builds listing parameters from raw query-string values.
    ///
    /// Unparseable numbers fall back to their defaults; `page` is clamped to
    /// `[1, MAX_PAGE]` and `page_size` to `[1, 100]`. Never fails.
    pub fn from_query(
        page: Option<&str>,
        page_size: Option<&str>,
        status: Option<String>,
        tipo: Option<String>,
        search: Option<String>,
    ) -> Self {
        fn number(value: Option<&str>, default: i64) -> i64 {
            value
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default)
        }

        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let page = number(page, DEFAULT_PAGE as i64).clamp(1, MAX_PAGE as i64) as u64;
        let page_size =
            number(page_size, DEFAULT_PAGE_SIZE as i64).clamp(1, MAX_PAGE_SIZE as i64) as u64;

        Self {
            page,
            page_size,
            status: non_empty(status),
            tipo: non_empty(tipo),
            search: non_empty(search),
        }
    }
}

/// Validated input for a status change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatusParams {
    pub id: i64,
    pub status: DemandaStatus,
}

impl UpdateStatusParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Status absent or outside the enumeration
    pub fn new(id: i64, status: Option<String>) -> Result<Self, AppError> {
        let status = status
            .as_deref()
            .and_then(|s| s.parse::<DemandaStatus>().ok())
            .ok_or_else(|| AppError::BadRequest(INVALID_STATUS_MESSAGE.to_string()))?;

        Ok(Self { id, status })
    }
}

/// Validated input for routing a demand to a sector.
#[derive(Debug, Clone, PartialEq)]
pub struct EncaminharParams {
    pub id: i64,
    pub id_setor: i32,
}

impl EncaminharParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `id_setor` absent or zero
    pub fn new(id: i64, id_setor: Option<i32>) -> Result<Self, AppError> {
        match id_setor {
            Some(id_setor) if id_setor != 0 => Ok(Self { id, id_setor }),
            _ => Err(AppError::BadRequest(MISSING_SETOR_MESSAGE.to_string())),
        }
    }
}

/// A demand read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Demanda {
    pub id: i32,
    pub titulo: String,
    pub descricao: String,
    pub tipo: String,
    pub protocolo: String,
    pub status: DemandaStatus,
    pub id_usuario: Option<i32>,
    pub id_setor: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl Demanda {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Demanda)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is outside the enumeration
    pub fn from_entity(entity: entity::demanda::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<DemandaStatus>()
            .map_err(|e| DbErr::Custom(format!("Demanda {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            titulo: entity.titulo,
            descricao: entity.descricao,
            tipo: entity.tipo,
            protocolo: entity.protocolo,
            status,
            id_usuario: entity.id_usuario,
            id_setor: entity.id_setor,
            created_at: entity.created_at,
        })
    }

    /// Converts the domain model to the listing DTO, dropping `descricao`.
    pub fn into_dto(self) -> DemandaDto {
        DemandaDto {
            id: self.id,
            titulo: self.titulo,
            tipo: self.tipo,
            status: self.status.as_str().to_string(),
            protocolo: self.protocolo,
            id_usuario: self.id_usuario,
            id_setor: self.id_setor,
            created_at: self.created_at,
        }
    }
}

/// One page of demands plus the total matching the same filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDemandas {
    pub demandas: Vec<Demanda>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl PaginatedDemandas {
    pub fn into_dto(self) -> PaginatedDemandasDto {
        PaginatedDemandasDto {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            data: self.demandas.into_iter().map(Demanda::into_dto).collect(),
        }
    }
}

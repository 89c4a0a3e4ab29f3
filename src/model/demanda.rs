use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /demanda/nova`.
///
/// Text fields are optional at the serde level so a missing field is reported
/// with the API's own validation message instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDemandaDto {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub id_usuario: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedDemandaDto {
    pub protocolo: String,
    pub message: String,
}

/// A demand as returned by the listing endpoint.
///
/// The listing projection leaves out `descricao`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DemandaDto {
    pub id: i32,
    pub titulo: String,
    pub tipo: String,
    pub status: String,
    pub protocolo: String,
    pub id_usuario: Option<i32>,
    pub id_setor: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDemandasDto {
    pub page: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    pub total: u64,
    pub data: Vec<DemandaDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusUpdatedDto {
    pub ok: bool,
    pub id: i64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EncaminharDemandaDto {
    #[serde(default)]
    pub id_setor: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DemandaEncaminhadaDto {
    pub ok: bool,
    pub id: i64,
    pub id_setor: i32,
    pub status: String,
}

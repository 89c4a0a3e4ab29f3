use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        demanda::{
            CreateDemandaDto, CreatedDemandaDto, DemandaEncaminhadaDto, EncaminharDemandaDto,
            PaginatedDemandasDto, StatusUpdatedDto, UpdateStatusDto,
        },
    },
    server::{
        error::AppError,
        model::demanda::{
            CreateDemandaParams, DemandaStatus, EncaminharParams, ListDemandasParams,
            UpdateStatusParams,
        },
        service::demanda::DemandaService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping demand endpoints in OpenAPI documentation
pub static DEMANDA_TAG: &str = "demanda";

pub const CREATED_MESSAGE: &str = "Demanda registrada com sucesso.";

/// Raw listing query. Numbers stay strings so bad input falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDemandasQuery {
    /// Page number, 1-based (default: 1)
    pub page: Option<String>,
    /// Items per page, clamped to 1..=100 (default: 20)
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    /// Exact status match
    pub status: Option<String>,
    /// Exact type match
    pub tipo: Option<String>,
    /// Substring of titulo or descricao
    pub search: Option<String>,
}

/// Register a new demand.
///
/// Validates the required text fields, generates the protocol number and stores
/// the demand with the default status.
///
/// # Returns
/// - `201 Created` - Protocol number and confirmation message
/// - `400 Bad Request` - Missing `titulo`, `descricao` or `tipo`, or malformed JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/demanda/nova",
    tag = DEMANDA_TAG,
    request_body = CreateDemandaDto,
    responses(
        (status = 201, description = "Demand registered", body = CreatedDemandaDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_demanda(
    State(state): State<AppState>,
    payload: Result<Json<CreateDemandaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateDemandaParams::from_dto(payload)?;

    let service = DemandaService::new(&state.db);

    let demanda = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDemandaDto {
            protocolo: demanda.protocolo,
            message: CREATED_MESSAGE.to_string(),
        }),
    ))
}

/// List demands with pagination and optional filters.
///
/// Filters are combined with AND; results are ordered newest first.
///
/// # Returns
/// - `200 OK` - Page of demands with the total matching the filters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/demanda/listar",
    tag = DEMANDA_TAG,
    params(ListDemandasQuery),
    responses(
        (status = 200, description = "Page of demands", body = PaginatedDemandasDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_demandas(
    State(state): State<AppState>,
    Query(query): Query<ListDemandasQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListDemandasParams::from_query(
        query.page.as_deref(),
        query.page_size.as_deref(),
        query.status,
        query.tipo,
        query.search,
    );

    let service = DemandaService::new(&state.db);

    let demandas = service.list(params).await?;

    Ok((StatusCode::OK, Json(demandas.into_dto())))
}

/// Change the status of a demand.
///
/// Any of the four statuses may be set regardless of the current one.
///
/// # Returns
/// - `200 OK` - Updated id and status
/// - `400 Bad Request` - Invalid id or status
/// - `404 Not Found` - No demand with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/demanda/{id}/status",
    tag = DEMANDA_TAG,
    params(
        ("id" = i32, Path, description = "Demand ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = StatusUpdatedDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Demand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let params = UpdateStatusParams::new(id, payload.status)?;
    let status = params.status;

    let service = DemandaService::new(&state.db);

    service.update_status(params).await?;

    Ok((
        StatusCode::OK,
        Json(StatusUpdatedDto {
            ok: true,
            id,
            status: status.as_str().to_string(),
        }),
    ))
}

/// Route a demand to a sector.
///
/// Sets the sector and forces the status to "Em análise".
///
/// # Returns
/// - `200 OK` - Id, sector and the forced status
/// - `400 Bad Request` - Invalid id, missing `id_setor`, or sector does not exist
/// - `404 Not Found` - No demand with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/demanda/{id}/encaminhar",
    tag = DEMANDA_TAG,
    params(
        ("id" = i32, Path, description = "Demand ID")
    ),
    request_body = EncaminharDemandaDto,
    responses(
        (status = 200, description = "Demand routed", body = DemandaEncaminhadaDto),
        (status = 400, description = "Missing or invalid id_setor", body = ErrorDto),
        (status = 404, description = "Demand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn encaminhar_demanda(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EncaminharDemandaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let params = EncaminharParams::new(id, payload.id_setor)?;
    let id_setor = params.id_setor;

    let service = DemandaService::new(&state.db);

    service.encaminhar(params).await?;

    Ok((
        StatusCode::OK,
        Json(DemandaEncaminhadaDto {
            ok: true,
            id,
            id_setor,
            status: DemandaStatus::EmAnalise.as_str().to_string(),
        }),
    ))
}

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        demanda::{
            CreateDemandaDto, CreatedDemandaDto, DemandaDto, DemandaEncaminhadaDto,
            EncaminharDemandaDto, PaginatedDemandasDto, StatusUpdatedDto, UpdateStatusDto,
        },
        health::{HealthDto, HealthErrorDto},
    },
    server::{
        controller::{
            demanda::{
                self, create_demanda, encaminhar_demanda, list_demandas, update_status,
            },
            health::{self, health_check},
        },
        state::AppState,
    },
};

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota não encontrada";

#[derive(OpenApi)]
#[openapi(
    info(title = "API Ágora", description = "Registro e acompanhamento de demandas"),
    paths(
        health::health_check,
        demanda::create_demanda,
        demanda::list_demandas,
        demanda::update_status,
        demanda::encaminhar_demanda,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        HealthErrorDto,
        CreateDemandaDto,
        CreatedDemandaDto,
        DemandaDto,
        PaginatedDemandasDto,
        UpdateStatusDto,
        StatusUpdatedDto,
        EncaminharDemandaDto,
        DemandaEncaminhadaDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "demanda", description = "Citizen demands"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/demanda/nova", post(create_demanda))
        .route("/demanda/listar", get(list_demandas))
        .route("/demanda/{id}/status", put(update_status))
        .route("/demanda/{id}/encaminhar", put(encaminhar_demanda))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: ROUTE_NOT_FOUND_MESSAGE.to_string(),
        }),
    )
}

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::health::{HealthDto, HealthErrorDto},
    server::state::AppState,
};

pub static HEALTH_TAG: &str = "health";

/// Reports whether the API can reach its database.
///
/// # Returns
/// - `200 OK` - `{ok: true, db: true}`
/// - `500 Internal Server Error` - `{ok: false, error}` when the database is unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = HealthErrorDto)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthDto { ok: true, db: true })).into_response(),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthErrorDto {
                    ok: false,
                    error: "DB indisponível".to_string(),
                }),
            )
                .into_response()
        }
    }
}

use crate::server::{
    data::demanda::DemandaRepository,
    error::AppError,
    model::demanda::{
        CreateDemandaParams, DemandaStatus, EncaminharParams, ListDemandasParams,
        UpdateStatusParams,
    },
    service::demanda::DemandaService,
};
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod list;
mod update_status;

/// Checks the `AG-<4 digits>-<6 digits>` protocol shape.
fn is_protocolo(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();

    parts.len() == 3
        && parts[0] == "AG"
        && parts[1].len() == 4
        && parts[1].chars().all(|c| c.is_ascii_digit())
        && parts[2].len() == 6
        && parts[2].chars().all(|c| c.is_ascii_digit())
}

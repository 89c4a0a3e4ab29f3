use crate::server::error::AppError;

pub const INVALID_ID_MESSAGE: &str = "ID inválido";

/// Parses a demand id from a path segment.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i64)` - Positive integer id, possibly beyond the range of stored ids
/// - `Err(AppError::BadRequest)` - Not a positive integer
pub fn parse_id(value: &str) -> Result<i64, AppError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}

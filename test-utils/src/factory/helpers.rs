//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts `count` demands with default values.
///
/// Rows are inserted sequentially, so their ids ascend in creation order.
///
/// # Returns
/// - `Ok(Vec<entity::demanda::Model>)` - Created demands in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_demandas(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::demanda::Model>, DbErr> {
    let mut demandas = Vec::with_capacity(count);
    for _ in 0..count {
        demandas.push(crate::factory::demanda::create_demanda(db).await?);
    }

    Ok(demandas)
}

use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or applying the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

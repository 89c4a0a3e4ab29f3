//! Sector factory for creating test sector entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sectors.
pub struct SetorFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
}

impl<'a> SetorFactory<'a> {
    /// Creates a new factory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nome: format!("{} {}", fixture::setor::DEFAULT_NOME, next_id()),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    /// Builds and inserts the sector.
    ///
    /// # Returns
    /// - `Ok(entity::setor::Model)` - Created sector
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::setor::Model, DbErr> {
        entity::setor::ActiveModel {
            id: ActiveValue::NotSet,
            nome: ActiveValue::Set(self.nome),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sector with default values.
///
/// Shorthand for `SetorFactory::new(db).build().await`.
pub async fn create_setor(db: &DatabaseConnection) -> Result<entity::setor::Model, DbErr> {
    SetorFactory::new(db).build().await
}

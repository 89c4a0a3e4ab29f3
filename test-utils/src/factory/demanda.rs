//! Demand factory for creating test demand entities.
//!
//! Defaults come from the demand fixture. The protocol number is made unique per
//! factory call and `created_at` is left to the storage default.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test demands with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::demanda::DemandaFactory;
///
/// let demanda = DemandaFactory::new(&db)
///     .titulo("Poste apagado")
///     .status("Em andamento")
///     .build()
///     .await?;
/// ```
pub struct DemandaFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::demanda::Model,
}

impl<'a> DemandaFactory<'a> {
    /// Creates a new factory with fixture defaults and a unique protocol number.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::demanda::entity_builder()
            .protocolo(format!("AG-2026-{:06}", id % 1_000_000))
            .build();

        Self { db, entity }
    }

    pub fn titulo(mut self, titulo: impl Into<String>) -> Self {
        self.entity.titulo = titulo.into();
        self
    }

    pub fn descricao(mut self, descricao: impl Into<String>) -> Self {
        self.entity.descricao = descricao.into();
        self
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.entity.tipo = tipo.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    pub fn id_usuario(mut self, id_usuario: Option<i32>) -> Self {
        self.entity.id_usuario = id_usuario;
        self
    }

    pub fn id_setor(mut self, id_setor: Option<i32>) -> Self {
        self.entity.id_setor = id_setor;
        self
    }

    /// Builds and inserts the demand.
    ///
    /// # Returns
    /// - `Ok(entity::demanda::Model)` - Created demand entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::demanda::Model, DbErr> {
        entity::demanda::ActiveModel {
            id: ActiveValue::NotSet,
            titulo: ActiveValue::Set(self.entity.titulo),
            descricao: ActiveValue::Set(self.entity.descricao),
            tipo: ActiveValue::Set(self.entity.tipo),
            protocolo: ActiveValue::Set(self.entity.protocolo),
            status: ActiveValue::Set(self.entity.status),
            id_usuario: ActiveValue::Set(self.entity.id_usuario),
            id_setor: ActiveValue::Set(self.entity.id_setor),
            created_at: ActiveValue::NotSet,
        }
        .insert(self.db)
        .await
    }
}

/// Creates a demand with default values.
///
/// Shorthand for `DemandaFactory::new(db).build().await`.
pub async fn create_demanda(db: &DatabaseConnection) -> Result<entity::demanda::Model, DbErr> {
    DemandaFactory::new(db).build().await
}

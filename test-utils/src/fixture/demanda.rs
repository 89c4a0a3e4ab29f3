//! Demand fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating demand entity models without database
//! insertion. Factories use these as their defaults.

use chrono::NaiveDate;
use entity::demanda;

/// Default test title.
pub const DEFAULT_TITULO: &str = "Buraco na rua";

/// Default test description.
pub const DEFAULT_DESCRICAO: &str = "Buraco grande em frente ao número 120";

/// Default test demand type.
pub const DEFAULT_TIPO: &str = "Infraestrutura";

/// Default test protocol number.
pub const DEFAULT_PROTOCOLO: &str = "AG-2026-000001";

/// Status assigned by the storage default.
pub const DEFAULT_STATUS: &str = "Recebida";

/// Creates a demand entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - titulo: `"Buraco na rua"`
/// - tipo: `"Infraestrutura"`
/// - protocolo: `"AG-2026-000001"`
/// - status: `"Recebida"`
/// - id_usuario / id_setor: `None`
/// - created_at: `2026-01-01 12:00:00`
pub fn entity() -> demanda::Model {
    entity_builder().build()
}

/// Creates a demand entity builder for customization.
pub fn entity_builder() -> DemandaEntityBuilder {
    DemandaEntityBuilder::default()
}

/// Builder for customized demand entity models.
pub struct DemandaEntityBuilder {
    entity: demanda::Model,
}

impl Default for DemandaEntityBuilder {
    fn default() -> Self {
        let created_at = NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default();

        Self {
            entity: demanda::Model {
                id: 1,
                titulo: DEFAULT_TITULO.to_string(),
                descricao: DEFAULT_DESCRICAO.to_string(),
                tipo: DEFAULT_TIPO.to_string(),
                protocolo: DEFAULT_PROTOCOLO.to_string(),
                status: DEFAULT_STATUS.to_string(),
                id_usuario: None,
                id_setor: None,
                created_at,
            },
        }
    }
}

impl DemandaEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn protocolo(mut self, protocolo: impl Into<String>) -> Self {
        self.entity.protocolo = protocolo.into();
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

    /// Builds and returns the demand entity model.
    pub fn build(self) -> demanda::Model {
        self.entity
    }
}

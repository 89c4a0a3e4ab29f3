//! Sector fixtures for creating in-memory test data.

use entity::setor;

/// Default test sector name.
pub const DEFAULT_NOME: &str = "Secretaria de Obras";

/// Creates a sector entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - nome: `"Secretaria de Obras"`
pub fn entity() -> setor::Model {
    setor::Model {
        id: 1,
        nome: DEFAULT_NOME.to_string(),
    }
}

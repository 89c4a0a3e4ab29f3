pub use super::demanda::Entity as Demanda;
pub use super::setor::Entity as Setor;

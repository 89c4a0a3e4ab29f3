//! Database repository layer.
//!
//! Repositories issue parameterized queries through SeaORM and return entity models
//! or plain counts; conversion to domain models happens in the service layer.

pub mod demanda;
pub mod setor;

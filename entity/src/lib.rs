//! SeaORM entity models for the Ágora database.
//!
//! Each module maps one table. The column layout mirrors the migrations in the
//! `migration` crate; storage defaults (`status`, `created_at`) live there.

pub mod prelude;

pub mod demanda;
pub mod setor;

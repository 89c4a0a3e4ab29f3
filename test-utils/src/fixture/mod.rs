//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for use in unit tests and as default
//! values for factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let demanda = fixture::demanda::entity_builder()
//!     .status("Concluída")
//!     .build();
//! ```

pub mod demanda;
pub mod setor;

pub use demanda::{entity as demanda_entity, entity_builder as demanda_entity_builder};
pub use setor::entity as setor_entity;

//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults (sourced from `fixture`),
//! reducing boilerplate in tests. Each entity has a `Factory` struct for
//! customization and a `create_*` convenience function.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let setor = factory::create_setor(&db).await?;
//! let demanda = factory::demanda::DemandaFactory::new(&db)
//!     .tipo("Saúde")
//!     .status("Concluída")
//!     .build()
//!     .await?;
//! ```

pub mod demanda;
pub mod helpers;
pub mod setor;

pub use demanda::create_demanda;
pub use helpers::create_demandas;
pub use setor::create_setor;

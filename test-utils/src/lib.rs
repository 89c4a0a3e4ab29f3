//! Ágora Test Utils
//!
//! Provides shared testing utilities for the Ágora API. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases with the application
//! schema applied through the real migrations.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: In-memory entity models, no database required
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_demanda_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_migrations().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let setor = factory::create_setor(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

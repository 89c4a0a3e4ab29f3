use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_migrations()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether the application migrations run during `build()`.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty schema.
    pub fn new() -> Self {
        Self { migrate: false }
    }

    /// Applies the application migrations (`setores` and `demandas` tables).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection and, when requested, runs the
    /// migrations against it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            setup.migrate().await?;
        } else {
            setup.database().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

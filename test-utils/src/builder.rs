use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Court;
///
/// let test = TestBuilder::new()
///     .with_table(Court)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after all tables exist.
    ///
    /// Used for schema objects the entity schema builder cannot express, such as the
    /// partial unique index guarding active booking slots.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement to run once the tables have been created.
    ///
    /// # Arguments
    /// - `sql` - Statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    /// Adds all tables required for court, schedule and booking operations.
    ///
    /// Adds the following in dependency order:
    /// - Court
    /// - ScheduleEntry
    /// - Booking
    /// - The unique (court, weekday) schedule index
    /// - The active booking slot unique index
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_court_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_court_tables(self) -> Self {
        self.with_table(Court)
            .with_table(ScheduleEntry)
            .with_table(Booking)
            .with_statement(migration::SCHEDULE_ENTRY_WEEKDAY_INDEX_SQL)
            .with_statement(migration::ACTIVE_BOOKING_SLOT_INDEX_SQL)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then the raw statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

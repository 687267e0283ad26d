use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables, then call `build()` to create the in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Group, Event, EventGroup};
///
/// let test = TestBuilder::new()
///     .with_table(Group)
///     .with_table(Event)
///     .with_table(EventGroup)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The statement is generated from the entity definition using SQLite syntax,
    /// including foreign keys declared through `belongs_to` relations. Tables with
    /// foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the `groups` table.
    pub fn with_group_tables(self) -> Self {
        self.with_table(Group)
    }

    /// Adds the tables backing the scout aggregate.
    ///
    /// Adds in dependency order:
    /// - Group
    /// - Scout
    /// - ScoutContact
    /// - ScoutGroup
    pub fn with_scout_tables(self) -> Self {
        self.with_group_tables()
            .with_table(Scout)
            .with_table(ScoutContact)
            .with_table(ScoutGroup)
    }

    /// Adds the tables backing the event aggregate.
    ///
    /// Adds in dependency order:
    /// - Group
    /// - Event
    /// - EventGroup
    pub fn with_event_tables(self) -> Self {
        self.with_group_tables()
            .with_table(Event)
            .with_table(EventGroup)
    }

    /// Adds every table of the schema.
    ///
    /// Use this when testing registrations or anything that crosses aggregates.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_scout_tables()
            .with_table(Event)
            .with_table(EventGroup)
            .with_table(Registration)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, model::PokemonModel, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// Pokémon fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_pokemon_table: bool,

    // Database fixtures to insert
    pokemon: Vec<PokemonModel>,
    mock_pokemon: Vec<(i32, String, String)>, // (number, name, primary_type)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_pokemon_table: false,
            pokemon: Vec::new(),
            mock_pokemon: Vec::new(),
        }
    }

    /// Add the `pokemon` table to the test database.
    pub fn with_pokemon_table(mut self) -> Self {
        self.include_pokemon_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pokerec_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), pokerec_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Pokemon)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a fully specified Pokémon record into the database.
    ///
    /// # Arguments
    /// - `pokemon` - The model to insert as-is, typically from [`factory`](crate::fixtures::pokemon::factory)
    pub fn with_pokemon(mut self, pokemon: PokemonModel) -> Self {
        self.pokemon.push(pokemon);
        self
    }

    /// Insert a Pokémon record with standard test stats.
    ///
    /// # Arguments
    /// - `number` - The Pokémon number, must be unique across the test
    /// - `name` - The Pokémon name
    /// - `primary_type` - The primary type used for recommendations
    pub fn with_mock_pokemon(
        mut self,
        number: i32,
        name: impl Into<String>,
        primary_type: impl Into<String>,
    ) -> Self {
        self.mock_pokemon
            .push((number, name.into(), primary_type.into()));
        self
    }

    /// Insert the Bulbasaur (#1), Ivysaur (#2) and Charmeleon (#5) starter fixtures.
    pub fn with_starter_pokemon(self) -> Self {
        self.with_pokemon(crate::fixtures::pokemon::factory::bulbasaur())
            .with_pokemon(crate::fixtures::pokemon::factory::ivysaur())
            .with_pokemon(crate::fixtures::pokemon::factory::charmeleon())
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (pokemon table if specified, then custom tables)
    /// 2. Inserts Pokémon fixtures, explicit models first and then mock records
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_pokemon_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Pokemon));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for pokemon in self.pokemon {
            setup.pokemon().insert_pokemon(pokemon).await?;
        }

        for (number, name, primary_type) in self.mock_pokemon {
            setup
                .pokemon()
                .insert_mock_pokemon(number, &name, &primary_type)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

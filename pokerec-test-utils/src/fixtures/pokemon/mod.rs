//! Pokémon fixture utilities.
//!
//! This module provides methods for inserting Pokémon records into the test database
//! and factory functions for creating in-memory model instances.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn pokemon<'a>(&'a mut self) -> PokemonFixtures<'a> {
        PokemonFixtures { setup: self }
    }
}

pub struct PokemonFixtures<'a> {
    pub setup: &'a mut TestContext,
}

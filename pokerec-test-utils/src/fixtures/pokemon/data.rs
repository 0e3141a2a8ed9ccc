//! Pokémon database insertion utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::pokemon::PokemonFixtures, model::PokemonModel};

impl<'a> PokemonFixtures<'a> {
    /// Insert a Pokémon record into the database as-is.
    ///
    /// # Arguments
    /// - `pokemon` - The model to insert, its `number` must not already exist
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - The inserted record
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. duplicate number or missing table
    pub async fn insert_pokemon(&self, pokemon: PokemonModel) -> Result<PokemonModel, TestError> {
        Ok(
            entity::prelude::Pokemon::insert(entity::pokemon::ActiveModel {
                number: ActiveValue::Set(pokemon.number),
                name: ActiveValue::Set(pokemon.name),
                primary_type: ActiveValue::Set(pokemon.primary_type),
                secondary_type: ActiveValue::Set(pokemon.secondary_type),
                price: ActiveValue::Set(pokemon.price),
                hp: ActiveValue::Set(pokemon.hp),
                attack: ActiveValue::Set(pokemon.attack),
                defense: ActiveValue::Set(pokemon.defense),
                sp_atk: ActiveValue::Set(pokemon.sp_atk),
                sp_def: ActiveValue::Set(pokemon.sp_def),
                speed: ActiveValue::Set(pokemon.speed),
                generation: ActiveValue::Set(pokemon.generation),
                legendary: ActiveValue::Set(pokemon.legendary),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a Pokémon record with standard test stats.
    ///
    /// # Arguments
    /// - `number` - The Pokémon number
    /// - `name` - The Pokémon name
    /// - `primary_type` - The primary type
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - The inserted record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_pokemon(
        &self,
        number: i32,
        name: &str,
        primary_type: &str,
    ) -> Result<PokemonModel, TestError> {
        self.insert_pokemon(super::factory::mock_pokemon_model(number, name, primary_type))
            .await
    }
}

//! Pokémon lookup and recommendation service.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::pokemon::PokemonRepository,
    error::{pokemon::PokemonError, Error},
    model::{db::PokemonModel, recommendation::Recommendations},
};

/// Maximum number of recommendations returned for a single Pokémon.
pub const RECOMMENDATION_LIMIT: u64 = 5;

/// Service for Pokémon lookups and same-type recommendations.
pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of PokemonService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a single Pokémon by number.
    ///
    /// # Arguments
    /// - `number` - Pokédex number of the Pokémon
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - Pokémon found
    /// - `Err(Error::PokemonError(PokemonError::NotFound))` - No Pokémon with this number
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_pokemon(&self, number: i32) -> Result<PokemonModel, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        let Some(pokemon) = pokemon_repo.get_by_number(number).await? else {
            let err = PokemonError::NotFound(number);
            tracing::debug!(pokemon_number = %number, "{}", err);

            return Err(err.into());
        };

        Ok(pokemon)
    }

    /// Retrieves a Pokémon and up to [`RECOMMENDATION_LIMIT`] others sharing its primary type.
    ///
    /// The requested Pokémon never appears in its own recommendations. Recommendations are
    /// returned in the store's default retrieval order, which carries no domain meaning.
    ///
    /// # Arguments
    /// - `number` - Pokédex number of the Pokémon to recommend for
    ///
    /// # Returns
    /// - `Ok(Recommendations)` - Pokémon found, with 0 to 5 recommendations
    /// - `Err(Error::PokemonError(PokemonError::NotFound))` - No Pokémon with this number
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_recommendations(&self, number: i32) -> Result<Recommendations, Error> {
        let pokemon = self.get_pokemon(number).await?;

        let pokemon_repo = PokemonRepository::new(self.db);
        let recommendations = pokemon_repo
            .get_many_by_primary_type(&pokemon.primary_type, pokemon.number, RECOMMENDATION_LIMIT)
            .await?;

        tracing::debug!(
            pokemon_number = %pokemon.number,
            primary_type = %pokemon.primary_type,
            count = recommendations.len(),
            "Found recommendations"
        );

        Ok(Recommendations {
            pokemon,
            recommendations,
        })
    }
}

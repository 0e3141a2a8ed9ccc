//! Database model type aliases used by fixtures.

/// Type alias for the Pokémon database model.
pub type PokemonModel = entity::pokemon::Model;

//! Factory functions for generating mock Pokémon database models.
//!
//! These are in-memory model instances that don't require database interaction. The starter
//! functions return the real Generation 1 entries used by the recommendation page scenarios.

use crate::model::PokemonModel;

/// Create a mock Pokémon model with standard test stats.
///
/// # Arguments
/// - `number` - The Pokémon number
/// - `name` - The Pokémon name
/// - `primary_type` - The primary type
///
/// # Returns
/// - `PokemonModel` - A model with an empty secondary type and a price of 300
pub fn mock_pokemon_model(number: i32, name: &str, primary_type: &str) -> PokemonModel {
    PokemonModel {
        number,
        name: name.to_string(),
        primary_type: primary_type.to_string(),
        secondary_type: String::new(),
        price: 300,
        hp: 50,
        attack: 50,
        defense: 50,
        sp_atk: 50,
        sp_def: 50,
        speed: 50,
        generation: 1,
        legendary: false,
    }
}

/// Bulbasaur, #1, Grass/Poison, $318
pub fn bulbasaur() -> PokemonModel {
    PokemonModel {
        number: 1,
        name: "Bulbasaur".to_string(),
        primary_type: "Grass".to_string(),
        secondary_type: "Poison".to_string(),
        price: 318,
        hp: 45,
        attack: 49,
        defense: 49,
        sp_atk: 65,
        sp_def: 65,
        speed: 45,
        generation: 1,
        legendary: false,
    }
}

/// Ivysaur, #2, Grass/Poison, $405
pub fn ivysaur() -> PokemonModel {
    PokemonModel {
        number: 2,
        name: "Ivysaur".to_string(),
        primary_type: "Grass".to_string(),
        secondary_type: "Poison".to_string(),
        price: 405,
        hp: 60,
        attack: 62,
        defense: 63,
        sp_atk: 80,
        sp_def: 80,
        speed: 60,
        generation: 1,
        legendary: false,
    }
}

/// Charmeleon, #5, Fire, $405
pub fn charmeleon() -> PokemonModel {
    PokemonModel {
        number: 5,
        name: "Charmeleon".to_string(),
        primary_type: "Fire".to_string(),
        secondary_type: String::new(),
        price: 405,
        hp: 58,
        attack: 64,
        defense: 58,
        sp_atk: 80,
        sp_def: 65,
        speed: 80,
        generation: 1,
        legendary: false,
    }
}

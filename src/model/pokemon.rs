use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PokemonDto {
    pub number: i32,
    pub name: String,
    pub primary_type: String,
    /// Empty when the Pokémon has a single type
    pub secondary_type: String,
    pub price: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_atk: i32,
    pub sp_def: i32,
    pub speed: i32,
    pub generation: i32,
    pub legendary: bool,
}

/// A Pokémon together with up to five others sharing its primary type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecommendationsDto {
    pub pokemon: PokemonDto,
    pub recommendations: Vec<PokemonDto>,
}

impl From<entity::pokemon::Model> for PokemonDto {
    fn from(model: entity::pokemon::Model) -> Self {
        Self {
            number: model.number,
            name: model.name,
            primary_type: model.primary_type,
            secondary_type: model.secondary_type,
            price: model.price,
            hp: model.hp,
            attack: model.attack,
            defense: model.defense,
            sp_atk: model.sp_atk,
            sp_def: model.sp_def,
            speed: model.speed,
            generation: model.generation,
            legendary: model.legendary,
        }
    }
}

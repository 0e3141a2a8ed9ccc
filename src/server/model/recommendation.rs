use crate::{
    model::pokemon::{PokemonDto, RecommendationsDto},
    server::model::db::PokemonModel,
};

/// Result of a recommendation lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendations {
    /// The requested Pokémon.
    pub pokemon: PokemonModel,
    /// Up to five other Pokémon sharing its primary type, in store order.
    pub recommendations: Vec<PokemonModel>,
}

impl From<Recommendations> for RecommendationsDto {
    fn from(value: Recommendations) -> Self {
        Self {
            pokemon: PokemonDto::from(value.pokemon),
            recommendations: value
                .recommendations
                .into_iter()
                .map(PokemonDto::from)
                .collect(),
        }
    }
}

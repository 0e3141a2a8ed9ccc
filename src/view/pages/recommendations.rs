use dioxus::prelude::*;

use crate::{
    model::pokemon::PokemonDto,
    view::{
        components::{Page, PokemonCard},
        render_page,
    },
};

/// Renders the full recommendations document for `pokemon`.
pub fn render_recommendations(pokemon: PokemonDto, recommendations: Vec<PokemonDto>) -> String {
    let title = format!("Recommendations for {}", pokemon.name);

    render_page(
        title,
        rsx!(RecommendationsPage {
            pokemon: pokemon,
            recommendations: recommendations
        }),
    )
}

#[component]
pub fn RecommendationsPage(pokemon: PokemonDto, recommendations: Vec<PokemonDto>) -> Element {
    rsx!(
        Page { class: "flex flex-col items-center gap-4",
            h1 {
                class: "text-2xl font-bold",
                "Recommendations for {pokemon.name}"
            }
            p {
                class: "opacity-70",
                "Other {pokemon.primary_type} type Pokémon you might like"
            }
            if recommendations.is_empty() {
                p {
                    "No other {pokemon.primary_type} type Pokémon are available right now."
                }
            } else {
                ul { class: "flex flex-wrap justify-center gap-4",
                    for recommendation in recommendations.iter() {
                        li { key: "{recommendation.number}",
                            PokemonCard { pokemon: recommendation.clone() }
                        }
                    }
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::model::pokemon::PokemonDto;

#[component]
pub fn PokemonCard(pokemon: PokemonDto) -> Element {
    let types = if pokemon.secondary_type.is_empty() {
        pokemon.primary_type.clone()
    } else {
        format!("{} / {}", pokemon.primary_type, pokemon.secondary_type)
    };

    rsx!(
        div {
            class: "card shadow-sm w-64",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    a {
                        href: "/recommendations/{pokemon.number}",
                        "{pokemon.name}"
                    }
                    if pokemon.legendary {
                        span { class: "badge badge-secondary", "Legendary" }
                    }
                }
                p { class: "text-sm opacity-70", "#{pokemon.number} · Generation {pokemon.generation}" }
                p { "{types}" }
                StatTable { pokemon: pokemon.clone() }
                p {
                    class: "text-lg font-semibold",
                    "${pokemon.price}"
                }
            }
        }
    )
}

#[component]
fn StatTable(pokemon: PokemonDto) -> Element {
    let stats = [
        ("HP", pokemon.hp),
        ("Attack", pokemon.attack),
        ("Defense", pokemon.defense),
        ("Sp. Atk", pokemon.sp_atk),
        ("Sp. Def", pokemon.sp_def),
        ("Speed", pokemon.speed),
    ];

    rsx!(
        table {
            class: "table table-xs",
            tbody {
                for (label, value) in stats {
                    tr {
                        th { "{label}" }
                        td { "{value}" }
                    }
                }
            }
        }
    )
}

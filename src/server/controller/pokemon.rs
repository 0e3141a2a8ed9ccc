use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pokemon::{PokemonDto, RecommendationsDto},
    },
    server::{error::Error, model::app::AppState, service::pokemon::PokemonService},
};

pub static POKEMON_TAG: &str = "pokemon";

/// Get a Pokémon by number
#[utoipa::path(
    get,
    path = "/api/pokemon/{pokemon_number}",
    tag = POKEMON_TAG,
    params(
        ("pokemon_number" = i32, Path, description = "Pokédex number of the Pokémon")
    ),
    responses(
        (status = 200, description = "Success when retrieving the Pokémon", body = PokemonDto),
        (status = 404, description = "Pokémon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(pokemon_number): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.get_pokemon(pokemon_number).await?;

    Ok((StatusCode::OK, Json(PokemonDto::from(pokemon))))
}

/// Get up to five Pokémon sharing a Pokémon's primary type
#[utoipa::path(
    get,
    path = "/api/pokemon/{pokemon_number}/recommendations",
    tag = POKEMON_TAG,
    params(
        ("pokemon_number" = i32, Path, description = "Pokédex number of the Pokémon")
    ),
    responses(
        (status = 200, description = "Success when retrieving recommendations", body = RecommendationsDto),
        (status = 404, description = "Pokémon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_recommendations(
    State(state): State<AppState>,
    Path(pokemon_number): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let recommendations = pokemon_service.get_recommendations(pokemon_number).await?;

    Ok((StatusCode::OK, Json(RecommendationsDto::from(recommendations))))
}

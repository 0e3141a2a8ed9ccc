use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{
    model::{api::ErrorDto, pokemon::RecommendationsDto},
    server::{
        error::{pokemon::PokemonError, Error},
        model::app::AppState,
        service::pokemon::PokemonService,
    },
    view::pages::{render_not_found, render_recommendations},
};

pub static RECOMMENDATION_TAG: &str = "recommendation";

/// Render the recommendations page for a Pokémon
///
/// Lists up to five other Pokémon sharing the requested Pokémon's primary type.
#[utoipa::path(
    get,
    path = "/recommendations/{pokemon_number}",
    tag = RECOMMENDATION_TAG,
    params(
        ("pokemon_number" = i32, Path, description = "Pokédex number of the Pokémon")
    ),
    responses(
        (status = 200, description = "Recommendations page", body = String, content_type = "text/html"),
        (status = 404, description = "Pokémon not found", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(pokemon_number): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let recommendations = match pokemon_service.get_recommendations(pokemon_number).await {
        Ok(recommendations) => recommendations,
        Err(Error::PokemonError(PokemonError::NotFound(_))) => {
            let html = render_not_found(format!("No Pokémon with number {}", pokemon_number));

            return Ok((StatusCode::NOT_FOUND, Html(html)).into_response());
        }
        Err(err) => return Err(err),
    };

    let RecommendationsDto {
        pokemon,
        recommendations,
    } = RecommendationsDto::from(recommendations);

    let html = render_recommendations(pokemon, recommendations);

    Ok((StatusCode::OK, Html(html)).into_response())
}

/// Fallback for routes that match no endpoint
pub async fn not_found() -> impl IntoResponse {
    let html = render_not_found("The page you requested does not exist.".to_string());

    (StatusCode::NOT_FOUND, Html(html))
}

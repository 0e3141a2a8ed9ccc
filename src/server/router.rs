//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Every endpoint is registered here with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /recommendations/{pokemon_number}` - HTML recommendations page
/// - `GET /api/pokemon/{pokemon_number}` - Pokémon details as JSON
/// - `GET /api/pokemon/{pokemon_number}/recommendations` - Recommendations as JSON
///
/// Any other path falls back to the HTML not-found page.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pokerec", description = "Pokémon recommendation API"), tags(
        (name = controller::recommendation::RECOMMENDATION_TAG, description = "Recommendation pages"),
        (name = controller::pokemon::POKEMON_TAG, description = "Pokémon API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::recommendation::get_recommendations))
        .routes(routes!(controller::pokemon::get_pokemon))
        .routes(routes!(controller::pokemon::get_pokemon_recommendations))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::recommendation::not_found)
}

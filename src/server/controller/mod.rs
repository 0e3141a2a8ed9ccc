//! HTTP controller endpoints.
//!
//! Axum handlers for the HTML recommendations page and the JSON Pokémon API. Controllers
//! extract path parameters, call the Pokémon service and turn its results into responses.
//! They use utoipa for OpenAPI documentation.

pub mod pokemon;
pub mod recommendation;

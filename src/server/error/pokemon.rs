use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PokemonError {
    #[error("Pokémon number {0:?} not found in database")]
    NotFound(i32),
}

impl IntoResponse for PokemonError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Pokémon not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

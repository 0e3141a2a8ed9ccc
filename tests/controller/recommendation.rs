//! Tests for the get_recommendations HTML endpoint.
//!
//! This module verifies the recommendations page for the starter scenario, the 404 page
//! for unknown Pokémon, and error handling when the database is unusable.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use pokerec::server::{controller::recommendation::get_recommendations, model::app::AppState};

use super::*;

/// Tests the recommendations page for Bulbasaur.
///
/// Verifies that the page names the requested Pokémon, lists Ivysaur with its price, and
/// leaves out Charmeleon whose primary type differs.
///
/// Expected: Ok with 200 OK HTML response
#[tokio::test]
async fn renders_recommendations_for_bulbasaur() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_table()
        .with_starter_pokemon()
        .build()
        .await?;

    let result = get_recommendations(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    assert!(content_type.is_some_and(|v| v.to_str().unwrap_or("").starts_with("text/html")));

    let body = body_string(resp).await;
    assert!(body.contains("Recommendations for Bulbasaur"));
    assert!(body.contains("Ivysaur"));
    assert!(!body.contains("Charmeleon"));
    assert!(body.contains("$405"));

    Ok(())
}

/// Tests the recommendations page for a Pokémon with no same-type peers.
///
/// Expected: Ok with 200 OK response naming the Pokémon and listing nobody else
#[tokio::test]
async fn renders_empty_recommendations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_table()
        .with_starter_pokemon()
        .build()
        .await?;

    let result = get_recommendations(State(test.to_app_state::<AppState>()), Path(5)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Recommendations for Charmeleon"));
    assert!(!body.contains("Bulbasaur"));
    assert!(!body.contains("Ivysaur"));

    Ok(())
}

/// Tests the page never lists more than five recommendations.
///
/// Expected: Ok with exactly five recommendation cards
#[tokio::test]
async fn renders_at_most_five_recommendations() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_pokemon_table();
    for number in 1..=9 {
        builder = builder.with_mock_pokemon(number, format!("Bug{:02}", number), "Bug");
    }
    let test = builder.build().await?;

    let result = get_recommendations(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let body = body_string(result.unwrap().into_response()).await;
    let listed = (2..=9)
        .filter(|number| body.contains(&format!("/recommendations/{}\"", number)))
        .count();
    assert_eq!(listed, 5);
    assert!(!body.contains("/recommendations/1\""));

    Ok(())
}

/// Tests the 404 page for an unknown Pokémon number.
///
/// Expected: Ok with 404 NOT_FOUND HTML response
#[tokio::test]
async fn not_found_for_nonexistent_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_table()
        .with_starter_pokemon()
        .build()
        .await?;

    let result = get_recommendations(State(test.to_app_state::<AppState>()), Path(1000)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_string(resp).await;
    assert!(body.contains("No Pokémon with number 1000"));
    assert!(!body.contains("Recommendations for"));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_recommendations(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

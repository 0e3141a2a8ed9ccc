//! End-to-end tests through the full router.
//!
//! Requests are driven with `tower::ServiceExt::oneshot` so path extraction, the fallback
//! route and the OpenAPI document are exercised exactly as the server wires them.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pokerec::server::{model::app::AppState, router::routes};
use pokerec_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_string;

async fn starter_router() -> Result<Router, TestError> {
    let test = TestBuilder::new()
        .with_pokemon_table()
        .with_starter_pokemon()
        .build()
        .await?;

    Ok(routes().with_state(test.to_app_state::<AppState>()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect the recommendations page for Bulbasaur through the router
#[tokio::test]
async fn serves_recommendations_page() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router.oneshot(get("/recommendations/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(body.contains("Recommendations for Bulbasaur"));
    assert!(body.contains("Ivysaur"));
    assert!(!body.contains("Charmeleon"));
    assert!(body.contains("$405"));

    Ok(())
}

/// Expect 404 for a nonexistent Pokémon number
#[tokio::test]
async fn not_found_for_nonexistent_pokemon() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router.oneshot(get("/recommendations/1000")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(body.contains("No Pokémon with number 1000"));

    Ok(())
}

/// Expect 400 when the Pokémon number is not an integer
#[tokio::test]
async fn bad_request_for_non_numeric_number() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router
        .oneshot(get("/recommendations/bulbasaur"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the JSON API to be routed
#[tokio::test]
async fn serves_json_api() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router
        .clone()
        .oneshot(get("/api/pokemon/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("\"name\":\"Ivysaur\""));

    let resp = router
        .oneshot(get("/api/pokemon/1/recommendations"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("\"price\":405"));

    Ok(())
}

/// Expect the HTML not-found page for unknown routes
#[tokio::test]
async fn falls_back_to_not_found_page() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router.oneshot(get("/pokedex")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp)
        .await
        .contains("The page you requested does not exist."));

    Ok(())
}

/// Expect the OpenAPI document to list every endpoint
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let router = starter_router().await?;

    let resp = router
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("/recommendations/{pokemon_number}"));
    assert!(body.contains("/api/pokemon/{pokemon_number}"));
    assert!(body.contains("/api/pokemon/{pokemon_number}/recommendations"));

    Ok(())
}

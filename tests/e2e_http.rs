// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

async fn first_planet(app: &axum::Router) -> Value {
    let resp = app.clone().oneshot(support::get("/planets")).await.unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    body["data"][0].clone()
}

#[tokio::test]
async fn health_is_wrapped_in_data() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/health")).await.unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body, json!({"data": {"status": "ok"}}));
}

#[tokio::test]
async fn listing_without_page_returns_the_whole_catalogue() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/planets")).await.unwrap();
    assert_eq!(resp.headers().get("x-api-version").unwrap(), "1");
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 115);
    assert!(body.get("links").is_none());
}

#[tokio::test]
async fn listing_with_page_is_paginated() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/planets?page=2")).await.unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 15);
    assert_eq!(body["meta"]["current_page"], 2);
    assert_eq!(body["meta"]["from"], 16);
    assert_eq!(body["meta"]["to"], 30);
    assert_eq!(body["meta"]["last_page"], 8);
    assert_eq!(body["meta"]["total"], 115);
    assert_eq!(body["meta"]["path"], "/planets");
    assert_eq!(body["links"]["next"], "/planets?page=3");
    assert_eq!(body["links"]["prev"], "/planets?page=1");
}

#[tokio::test]
async fn page_size_comes_from_the_query_and_is_capped() {
    let app = support::make_test_router();
    let resp = app
        .clone()
        .oneshot(support::get("/planets?page=1&per_page=5"))
        .await
        .unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["last_page"], 23);

    let resp = app
        .oneshot(support::get("/planets?page=1&perPage=1000"))
        .await
        .unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["meta"]["per_page"], 100);
    assert_eq!(body["data"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn showing_a_planet() {
    let app = support::make_test_router();
    let planet = first_planet(&app).await;
    let id = planet["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(support::get(&format!("/planets/{id}")))
        .await
        .unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["data"], planet);

    let resp = app
        .oneshot(support::get(&format!("/planets/{id}/name")))
        .await
        .unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["data"], planet["name"]);
}

#[tokio::test]
async fn missing_planet_is_a_404_envelope() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/planets/1234")).await.unwrap();
    let body = support::json_body(resp, StatusCode::NOT_FOUND).await;
    assert_eq!(
        body,
        json!({"errors": [{"detail": "Planet does not exists", "status": 404, "title": "PlanetNotFound"}]})
    );
}

#[tokio::test]
async fn catalog_route_applies_the_summary_transformer() {
    let app = support::make_test_router();
    let planet = first_planet(&app).await;
    let id = planet["id"].as_str().unwrap();

    let resp = app
        .oneshot(support::get(&format!("/catalog/{id}")))
        .await
        .unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(
        body,
        json!({"data": {"id": id, "name": planet["name"], "distance_ly": planet["distance"]}})
    );
}

#[tokio::test]
async fn creating_a_planet_returns_201() {
    let app = support::make_test_router_with(support::build_test_state(0));
    let req = support::json_request(
        "POST",
        "/planets",
        &json!({"name": "Kepler-22b", "mass": 0.1, "distance": 620.0}),
    );
    let resp = app.clone().oneshot(req).await.unwrap();
    let body = support::json_body(resp, StatusCode::CREATED).await;
    assert_eq!(body["data"]["name"], "Kepler-22b");

    let resp = app.oneshot(support::get("/planets")).await.unwrap();
    let body = support::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_planet_is_rejected_with_422() {
    let app = support::make_test_router();
    let req = support::json_request("POST", "/planets", &json!({"mass": -3}));
    let resp = app.oneshot(req).await.unwrap();
    let body = support::json_body(resp, StatusCode::UNPROCESSABLE_ENTITY).await;
    assert_eq!(body["message"], "The given data was invalid.");
    assert_eq!(body["errors"]["name"], json!(["The name field is required."]));
    assert_eq!(body["errors"]["mass"], json!(["The mass must be greater than 0."]));
    assert_eq!(body["errors"]["distance"], json!(["The distance field is required."]));
}

#[tokio::test]
async fn deleting_a_planet_returns_204_then_404() {
    let app = support::make_test_router();
    let planet = first_planet(&app).await;
    let uri = format!("/planets/{}", planet["id"].as_str().unwrap());

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let resp = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(support::body_bytes(resp).await.is_empty());

    let resp = app.oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use json_responder::domain::planet::PlanetCatalog;
use json_responder::infrastructure::catalog::InMemoryPlanetCatalog;
use json_responder::presentation::http::{extractors::RequestContext, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn build_test_state(planets: usize) -> HttpState {
    let catalog: Arc<dyn PlanetCatalog> = Arc::new(InMemoryPlanetCatalog::generate(planets));
    HttpState {
        catalog,
        default_page_size: 15,
        max_page_size: 100,
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(build_test_state(115))
}

pub fn make_test_router_with(state: HttpState) -> axum::Router {
    json_responder::presentation::http::routes::build_router(state)
}

pub fn request_context(uri: &str) -> RequestContext {
    RequestContext::new(Method::GET, &uri.parse().expect("valid uri"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec()
}

/// Assert the status and a JSON content type, then return the parsed body.
pub async fn json_body(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

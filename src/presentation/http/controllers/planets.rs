// src/presentation/http/controllers/planets.rs
use crate::application::actions::planets::{
    CreatePlanet, CreatePlanetInput, DeletePlanet, ListPlanets, ShowPlanet,
};
use crate::domain::{fault::Fault, payload::Payload};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::factory::ResponderFactory;
use crate::presentation::http::responder::Invocation;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{HeaderName, HeaderValue, StatusCode},
    response::Response,
};
use serde_json::json;

const API_VERSION: HeaderName = HeaderName::from_static("x-api-version");

pub async fn show_planet(
    Extension(state): Extension<HttpState>,
    factory: ResponderFactory,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let responder = factory
        .action(ShowPlanet::new(state.catalog()), show)
        .set_parameters([id]);
    factory.respond(responder).await.into_http()
}

async fn show(invocation: Invocation<ShowPlanet>) -> Result<Payload, Fault> {
    let id = invocation.parameter(0).unwrap_or_default();
    let planet = invocation.action.execute(id)?;
    Ok(Payload::item(planet))
}

pub async fn planet_name(
    Extension(state): Extension<HttpState>,
    factory: ResponderFactory,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let responder = factory
        .action(ShowPlanet::new(state.catalog()), name)
        .set_parameters([id]);
    factory.respond(responder).await.into_http()
}

async fn name(invocation: Invocation<ShowPlanet>) -> Result<Payload, Fault> {
    let id = invocation.parameter(0).unwrap_or_default();
    Ok(Payload::Text(invocation.action.execute(id)?.name))
}

/// Whole catalogue, or one page of it when `page` is in the query string.
pub async fn list_planets(
    Extension(state): Extension<HttpState>,
    factory: ResponderFactory,
) -> HttpResult<Response> {
    let action = ListPlanets::new(
        state.catalog(),
        state.default_page_size,
        state.max_page_size,
    );
    let responder = factory
        .action(action, list)
        .header(API_VERSION, HeaderValue::from_static("1"));
    factory.respond(responder).await.into_http()
}

async fn list(invocation: Invocation<ListPlanets>) -> Result<Payload, Fault> {
    Ok(invocation.action.execute())
}

pub async fn create_planet(
    Extension(state): Extension<HttpState>,
    factory: ResponderFactory,
    Json(input): Json<CreatePlanetInput>,
) -> HttpResult<Response> {
    let responder = factory
        .action(CreatePlanet::new(state.catalog()), move |invocation| {
            create(invocation, input)
        })
        .set_status_code(StatusCode::CREATED);
    factory.respond(responder).await.into_http()
}

async fn create(
    invocation: Invocation<CreatePlanet>,
    input: CreatePlanetInput,
) -> Result<Payload, Fault> {
    let planet = invocation.action.execute(input)?;
    Ok(Payload::item(planet))
}

pub async fn delete_planet(
    Extension(state): Extension<HttpState>,
    factory: ResponderFactory,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let responder = factory
        .action(DeletePlanet::new(state.catalog()), delete)
        .set_parameters([id]);
    factory.respond(responder).await.into_http()
}

async fn delete(invocation: Invocation<DeletePlanet>) -> Result<Payload, Fault> {
    let id = invocation.parameter(0).unwrap_or_default();
    Ok(Payload::Bool(invocation.action.execute(id)?))
}

pub async fn health(factory: ResponderFactory) -> HttpResult<Response> {
    let responder = factory.handle(status);
    factory.respond(responder).await.into_http()
}

async fn status(_: Invocation<()>) -> Result<Payload, Fault> {
    Ok(Payload::serializable(json!({ "status": "ok" })))
}

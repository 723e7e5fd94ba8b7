// src/presentation/http/routes.rs
use crate::application::{
    actions::planets::{ShowPlanet, planet_summary},
    ports::action::Action,
    transformer::Transformer,
};
use crate::domain::{fault::Fault, payload::Payload};
use crate::presentation::http::controllers::planets;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::factory::ResponderFactory;
use crate::presentation::http::responder::Invocation;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    extract::{Path, rejection::PathRejection},
    http::Method,
    response::Response,
    routing::{MethodFilter, MethodRouter, get, on},
};
use std::{future::Future, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(planets::health))
        .route(
            "/planets",
            get(planets::list_planets).post(planets::create_planet),
        )
        .route(
            "/planets/{id}",
            get(planets::show_planet).delete(planets::delete_planet),
        )
        .route("/planets/{id}/name", get(planets::planet_name))
        .route(
            "/catalog/{id}",
            action_route(
                MethodFilter::GET,
                |state: &HttpState| ShowPlanet::new(state.catalog()),
                show_summary,
                Some(Arc::new(planet_summary())),
            ),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn show_summary(invocation: Invocation<ShowPlanet>) -> Result<Payload, Fault> {
    let id = invocation.parameter(0).unwrap_or_default();
    Ok(Payload::item(invocation.action.execute(id)?))
}

/// Binds `method` to a callback that receives a freshly resolved action.
///
/// Route parameters are forwarded in path order, and `transformer`, when
/// given, is installed on every responder.
pub fn action_route<A, R, F, Fut>(
    method: MethodFilter,
    resolve: R,
    callback: F,
    transformer: Option<Arc<dyn Transformer>>,
) -> MethodRouter
where
    A: Action,
    R: Fn(&HttpState) -> A + Clone + Send + Sync + 'static,
    F: Fn(Invocation<A>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Payload, Fault>> + Send + 'static,
{
    on(
        method,
        move |Extension(state): Extension<HttpState>,
              factory: ResponderFactory,
              parameters: Result<Path<Vec<String>>, PathRejection>| {
            let resolve = resolve.clone();
            let callback = callback.clone();
            let transformer = transformer.clone();
            async move {
                dispatch_action(state, factory, parameters, resolve, callback, transformer).await
            }
        },
    )
}

async fn dispatch_action<A, R, F, Fut>(
    state: HttpState,
    factory: ResponderFactory,
    parameters: Result<Path<Vec<String>>, PathRejection>,
    resolve: R,
    callback: F,
    transformer: Option<Arc<dyn Transformer>>,
) -> HttpResult<Response>
where
    A: Action,
    R: Fn(&HttpState) -> A,
    F: FnOnce(Invocation<A>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Payload, Fault>> + Send + 'static,
{
    let parameters = parameters.map(|Path(values)| values).unwrap_or_default();
    let mut responder = factory
        .action(resolve(&state), callback)
        .set_parameters(parameters);
    if let Some(transformer) = transformer {
        responder = responder.set_shared_transformer(transformer);
    }
    factory.respond(responder).await.into_http()
}

// src/presentation/http/factory.rs
use crate::application::{error::ResponderResult, ports::action::Action};
use crate::domain::{fault::Fault, payload::Payload};
use crate::presentation::http::extractors::RequestContext;
use crate::presentation::http::responder::{Invocation, JsonResponder};
use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::{convert::Infallible, future::Future};

/// Builds responders bound to the current request.
#[derive(Debug, Clone, Default)]
pub struct ResponderFactory {
    request: RequestContext,
}

impl ResponderFactory {
    pub const fn new(request: RequestContext) -> Self {
        Self { request }
    }

    /// Responder bound to `action`. Paginated actions receive `page`,
    /// `per_page` and `perPage` from the query string first.
    pub fn json<A: Action>(&self, mut action: A) -> JsonResponder<A> {
        self.setup_action(&mut action);
        JsonResponder::new(action)
    }

    pub fn action<A, F, Fut>(&self, action: A, handler: F) -> JsonResponder<A>
    where
        A: Action,
        F: FnOnce(Invocation<A>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Payload, Fault>> + Send + 'static,
    {
        self.json(action).handle(handler)
    }

    pub fn handle<F, Fut>(&self, handler: F) -> JsonResponder
    where
        F: FnOnce(Invocation<()>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Payload, Fault>> + Send + 'static,
    {
        JsonResponder::default().handle(handler)
    }

    pub async fn respond<A: Action>(&self, responder: JsonResponder<A>) -> ResponderResult<Response> {
        responder.to_response(&self.request).await
    }

    fn setup_action<A: Action>(&self, action: &mut A) {
        let Some(pagination) = action.as_paginated() else {
            return;
        };

        if let Some(page) = self.number("page") {
            pagination.set_page(page);
        }
        // `perPage` wins when both spellings are present.
        for key in ["per_page", "perPage"] {
            if let Some(size) = self.number(key) {
                pagination.set_page_size(size);
            }
        }
    }

    fn number(&self, key: &str) -> Option<u64> {
        let raw = self.request.query(key)?;
        raw.trim()
            .parse()
            .inspect_err(|_| tracing::debug!(key, value = raw, "ignoring non-numeric pagination value"))
            .ok()
    }
}

impl<S> FromRequestParts<S> for ResponderFactory
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(RequestContext::from_parts(parts)))
    }
}

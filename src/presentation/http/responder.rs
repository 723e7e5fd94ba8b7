// src/presentation/http/responder.rs
use crate::application::{
    classifier::{Classified, PayloadClassifier},
    error::{ResponderError, ResponderResult},
    faults::{FaultDescriptor, FaultDisposition},
    ports::action::Action,
    transformer::Transformer,
};
use crate::domain::{fault::Fault, payload::Payload};
use crate::presentation::http::envelope::{DataEnvelope, PaginatedEnvelope, fault_body, item_value};
use crate::presentation::http::extractors::RequestContext;
use axum::{
    Json,
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::{future::Future, pin::Pin, sync::Arc};

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Payload, Fault>> + Send>>;

type Handler<A> = Box<dyn FnOnce(Invocation<A>) -> HandlerFuture + Send>;

/// Arguments of a handler call: the request, the bound action, then any
/// extra parameters.
#[derive(Debug)]
pub struct Invocation<A> {
    pub request: RequestContext,
    pub action: A,
    pub parameters: Vec<String>,
}

impl<A> Invocation<A> {
    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).map(String::as_str)
    }
}

/// Turns whatever a handler returns into a normalized JSON response.
///
/// Built once per request, then consumed by [`JsonResponder::to_response`].
pub struct JsonResponder<A = ()> {
    action: A,
    handler: Option<Handler<A>>,
    transformer: Option<Arc<dyn Transformer>>,
    status: Option<StatusCode>,
    headers: HeaderMap,
    parameters: Vec<String>,
}

impl Default for JsonResponder<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<A: Action> JsonResponder<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            handler: None,
            transformer: None,
            status: None,
            headers: HeaderMap::new(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn handle<F, Fut>(mut self, handler: F) -> Self
    where
        F: FnOnce(Invocation<A>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Payload, Fault>> + Send + 'static,
    {
        self.handler = Some(Box::new(move |invocation| -> HandlerFuture {
            Box::pin(handler(invocation))
        }));
        self
    }

    #[must_use]
    pub fn set_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn set_transformer<T: Transformer + 'static>(self, transformer: T) -> Self {
        self.set_shared_transformer(Arc::new(transformer))
    }

    #[must_use]
    pub fn set_shared_transformer(mut self, transformer: Arc<dyn Transformer>) -> Self {
        self.transformer = Some(transformer);
        self
    }

    #[must_use]
    pub const fn set_status_code(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Header added to every response this responder produces.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Explicit status code, or 200.
    pub fn status_code(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub const fn action(&self) -> &A {
        &self.action
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler once and build the response.
    ///
    /// Faults carrying a status in `100..600` become error envelopes. Every
    /// other fault, and every validation fault, comes back as
    /// [`ResponderError::Raised`].
    pub async fn to_response(self, request: &RequestContext) -> ResponderResult<Response> {
        let Self {
            action,
            handler,
            transformer,
            status,
            headers,
            parameters,
        } = self;

        let handler = handler.ok_or(ResponderError::NoHandlerConfigured)?;
        let settings = ResponseSettings { status, headers };
        let invocation = Invocation {
            request: request.clone(),
            action,
            parameters,
        };

        tracing::debug!(method = %request.method(), path = request.path(), "invoking handler");
        match handler(invocation).await {
            Ok(payload) => settings.respond_with_payload(payload, transformer.as_deref(), request),
            Err(fault) => settings.respond_with_fault(fault),
        }
    }
}

/// Status and headers frozen at the moment the handler runs.
struct ResponseSettings {
    status: Option<StatusCode>,
    headers: HeaderMap,
}

impl ResponseSettings {
    fn status_or(&self, default: StatusCode) -> StatusCode {
        self.status.unwrap_or(default)
    }

    fn respond_with_payload(
        self,
        payload: Payload,
        transformer: Option<&dyn Transformer>,
        request: &RequestContext,
    ) -> ResponderResult<Response> {
        let classified = PayloadClassifier::new(transformer)
            .classify(payload)
            .inspect_err(|err| tracing::error!(error = %err, "payload could not be serialized"))?;
        tracing::debug!(kind = %classified.kind(), "payload classified");

        match classified {
            Classified::Empty => {
                let status = self.status_or(StatusCode::NO_CONTENT);
                Ok(self.finish(Body::empty().into_response(), status))
            }
            Classified::Text(text) => self.json(&DataEnvelope { data: text }),
            Classified::PreBuilt(response) => {
                let status = self.status_or(StatusCode::OK);
                Ok(self.finish(response, status))
            }
            Classified::Collection(items) => self.json(&DataEnvelope {
                data: item_value(Payload::Collection(items))?,
            }),
            Classified::Paginated(mut page) => {
                page.set_path_if_missing(request.path());
                self.json(&PaginatedEnvelope::from_paginator(page)?)
            }
            Classified::Serializable(payload) => self.json(&DataEnvelope {
                data: item_value(payload)?,
            }),
            Classified::Structured(map) => self.json(&DataEnvelope { data: map }),
        }
    }

    fn respond_with_fault(mut self, fault: Fault) -> ResponderResult<Response> {
        match FaultDescriptor::inspect(fault) {
            FaultDisposition::Reraise(fault) => {
                tracing::warn!(error = %fault, "handler fault re-raised");
                Err(ResponderError::Raised(fault))
            }
            FaultDisposition::Respond(descriptor) => {
                tracing::debug!(status = %descriptor.status, title = %descriptor.title, "handler fault mapped");
                self.status = Some(descriptor.status);
                let body = fault_body(&descriptor)?;
                let status = self.status_or(StatusCode::OK);
                Ok(self.finish(Json(body).into_response(), status))
            }
        }
    }

    fn json<T: Serialize>(self, body: &T) -> ResponderResult<Response> {
        let body = serde_json::to_value(body)?;
        let status = self.status_or(StatusCode::OK);
        Ok(self.finish(Json(body).into_response(), status))
    }

    /// Merge builder headers and force the final status.
    fn finish(self, mut response: Response, status: StatusCode) -> Response {
        response.headers_mut().extend(self.headers);
        *response.status_mut() = status;
        tracing::debug!(status = %status, "response built");
        response
    }
}

// src/lib.rs
//! Normalized JSON responses for axum handlers.
//!
//! A [`JsonResponder`] runs one handler, classifies whatever it returns and
//! renders it as a `{"data": ...}` document, a paginated document, an error
//! envelope or an empty 204.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{
    ResponderError, ResponderResult,
    transformer::{Transformer, for_type},
};
pub use domain::{
    ArrayWrapper, Arrayable, Fault, HandlerFault, JsonSerializable, LengthAwarePaginator, Mapping,
    MessageBag, Payload, ValidationError,
};
pub use presentation::http::{
    factory::ResponderFactory,
    responder::{Invocation, JsonResponder},
    routes::action_route,
};

// src/application/classifier.rs
//! Decides how a handler payload is serialized.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. null and booleans are empty
//! 2. strings are text
//! 3. finished responses pass through
//! 4. the transformer, when configured, runs over everything else
//! 5. collections and paginators (mappings inside them get wrapped)
//! 6. values with a to-mapping conversion
//! 7. plain mappings
//! 8. values with a generic JSON serialization
//! 9. anything left cannot be serialized
use crate::application::error::{ResponderError, ResponderResult};
use crate::application::transformer::{Transformer, transform_payload};
use crate::domain::pagination::LengthAwarePaginator;
use crate::domain::payload::{ArrayWrapper, Mapping, Payload};
use axum::response::Response;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Empty,
    Text,
    PreBuilt,
    Collection,
    Paginated,
    Serializable,
    Structured,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Empty => "empty",
            Self::Text => "text",
            Self::PreBuilt => "pre-built",
            Self::Collection => "collection",
            Self::Paginated => "paginated",
            Self::Serializable => "serializable",
            Self::Structured => "structured",
        };
        f.write_str(label)
    }
}

/// A payload together with the strategy chosen for it.
pub enum Classified {
    Empty,
    Text(String),
    PreBuilt(Response),
    Collection(Vec<Payload>),
    Paginated(LengthAwarePaginator<Payload>),
    /// Holds an `Arrayable` or `Serializable` payload.
    Serializable(Payload),
    Structured(Mapping),
}

impl fmt::Debug for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Collection(items) => f.debug_tuple("Collection").field(items).finish(),
            Self::Paginated(page) => f.debug_tuple("Paginated").field(page).finish(),
            Self::Serializable(payload) => f.debug_tuple("Serializable").field(payload).finish(),
            Self::Structured(map) => f.debug_tuple("Structured").field(map).finish(),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl Classified {
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Empty => PayloadKind::Empty,
            Self::Text(_) => PayloadKind::Text,
            Self::PreBuilt(_) => PayloadKind::PreBuilt,
            Self::Collection(_) => PayloadKind::Collection,
            Self::Paginated(_) => PayloadKind::Paginated,
            Self::Serializable(_) => PayloadKind::Serializable,
            Self::Structured(_) => PayloadKind::Structured,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct PayloadClassifier<'a> {
    transformer: Option<&'a dyn Transformer>,
}

impl<'a> PayloadClassifier<'a> {
    pub const fn new(transformer: Option<&'a dyn Transformer>) -> Self {
        Self { transformer }
    }

    pub fn classify(&self, payload: Payload) -> ResponderResult<Classified> {
        match payload {
            Payload::Null | Payload::Bool(_) => Ok(Classified::Empty),
            Payload::Text(text) => Ok(Classified::Text(text)),
            Payload::Resource(response) => Ok(Classified::PreBuilt(response)),
            payload => {
                let payload = match self.transformer {
                    Some(transformer) => transform_payload(transformer, payload)?,
                    None => payload,
                };
                into_resource(payload)
            }
        }
    }
}

fn into_resource(payload: Payload) -> ResponderResult<Classified> {
    match payload {
        Payload::Collection(items) => Ok(Classified::Collection(wrap_structured_items(items))),
        Payload::Paginated(page) => {
            let page = if page.first().is_some_and(Payload::is_array) {
                page.map(wrap_structured)
            } else {
                page
            };
            Ok(Classified::Paginated(page))
        }
        payload @ Payload::Arrayable(_) => Ok(Classified::Serializable(payload)),
        Payload::Array(map) => Ok(Classified::Structured(map)),
        payload @ Payload::Serializable(_) => Ok(Classified::Serializable(payload)),
        other => Err(ResponderError::unserializable(other.type_name())),
    }
}

/// Wrap each mapping of a collection whose first element is a mapping.
fn wrap_structured_items(items: Vec<Payload>) -> Vec<Payload> {
    if items.first().is_some_and(Payload::is_array) {
        items.into_iter().map(wrap_structured).collect()
    } else {
        items
    }
}

fn wrap_structured(item: Payload) -> Payload {
    match item {
        Payload::Array(map) => Payload::item(ArrayWrapper::new(map)),
        other => other,
    }
}

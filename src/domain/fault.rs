// src/domain/fault.rs
use crate::domain::payload::AsAny;
use indexmap::IndexMap;
use serde::Serialize;
use std::{error::Error, fmt};

/// Named groups of error messages, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageBag(IndexMap<String, Vec<String>>);

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(key, message);
        self
    }

    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, M> FromIterator<(K, M)> for MessageBag
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, message) in iter {
            bag.add(key, message);
        }
        bag
    }
}

/// Capabilities a handler error exposes to the response pipeline.
///
/// `code` is read as an HTTP status when it falls in `100..600`; any other
/// value hands the error back to the caller.
pub trait HandlerFault: Error + AsAny {
    fn code(&self) -> i64 {
        0
    }

    /// Short type name of the error, used as the envelope title.
    fn title(&self) -> String {
        short_type_name(std::any::type_name_of_val(self)).to_owned()
    }

    fn message_bag(&self) -> Option<&MessageBag> {
        None
    }
}

/// Last path segment of a type name, without generic arguments.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Input validation failure raised by the framework layer.
///
/// Never turned into an envelope by the responder; it always travels back to
/// the transport's own error handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    errors: MessageBag,
}

impl ValidationError {
    pub const DEFAULT_MESSAGE: &'static str = "The given data was invalid.";

    pub fn new(errors: MessageBag) -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_owned(),
            errors,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn errors(&self) -> &MessageBag {
        &self.errors
    }
}

/// An error raised by a handler.
pub enum Fault {
    Validation(ValidationError),
    Handler(Box<dyn HandlerFault>),
}

impl Fault {
    pub fn new<E: HandlerFault>(error: E) -> Self {
        Self::Handler(Box::new(error))
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn as_handler(&self) -> Option<&dyn HandlerFault> {
        match self {
            Self::Handler(inner) => Some(inner.as_ref()),
            Self::Validation(_) => None,
        }
    }

    pub fn downcast_ref<E: HandlerFault>(&self) -> Option<&E> {
        self.as_handler()
            .and_then(|inner| inner.as_any().downcast_ref())
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => f.debug_tuple("Validation").field(err).finish(),
            Self::Handler(inner) => f.debug_tuple("Handler").field(inner).finish(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => fmt::Display::fmt(err, f),
            Self::Handler(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Handler(inner) => inner.source(),
        }
    }
}

impl<E: HandlerFault> From<E> for Fault {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<ValidationError> for Fault {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

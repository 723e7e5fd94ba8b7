// src/application/error.rs
use crate::domain::fault::Fault;
use thiserror::Error;

pub type ResponderResult<T> = Result<T, ResponderError>;

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("no handler set")]
    NoHandlerConfigured,

    #[error("Cannot serialize object")]
    UnserializablePayload { type_name: &'static str },

    #[error("transformer expected `{expected}` but received `{found}`")]
    Transform {
        expected: &'static str,
        found: &'static str,
    },

    /// A handler fault the responder does not turn into an envelope, carried
    /// back unchanged.
    #[error(transparent)]
    Raised(Fault),

    #[error("failed to encode response body: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ResponderError {
    pub const fn unserializable(type_name: &'static str) -> Self {
        Self::UnserializablePayload { type_name }
    }

    pub fn into_fault(self) -> Option<Fault> {
        match self {
            Self::Raised(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<Fault> for ResponderError {
    fn from(fault: Fault) -> Self {
        Self::Raised(fault)
    }
}

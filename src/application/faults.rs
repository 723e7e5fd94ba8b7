// src/application/faults.rs
use crate::domain::fault::{Fault, MessageBag};
use axum::http::StatusCode;

pub const fn is_valid_http_status_code(code: i64) -> bool {
    code >= 100 && code < 600
}

/// What the responder needs to know about a fault to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultDescriptor {
    pub status: StatusCode,
    pub message: String,
    pub title: String,
    pub message_bag: Option<MessageBag>,
}

/// Outcome of inspecting a handler fault.
#[derive(Debug)]
pub enum FaultDisposition {
    /// Render an error envelope.
    Respond(FaultDescriptor),
    /// Hand the fault back to the caller unchanged.
    Reraise(Fault),
}

impl FaultDescriptor {
    /// Validation faults and faults without a usable HTTP status are
    /// re-raised.
    pub fn inspect(fault: Fault) -> FaultDisposition {
        let descriptor = match &fault {
            Fault::Validation(_) => None,
            Fault::Handler(inner) => status_from_code(inner.code()).map(|status| Self {
                status,
                message: inner.to_string(),
                title: inner.title(),
                message_bag: inner.message_bag().cloned(),
            }),
        };

        match descriptor {
            Some(descriptor) => FaultDisposition::Respond(descriptor),
            None => FaultDisposition::Reraise(fault),
        }
    }
}

fn status_from_code(code: i64) -> Option<StatusCode> {
    if !is_valid_http_status_code(code) {
        return None;
    }
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
}

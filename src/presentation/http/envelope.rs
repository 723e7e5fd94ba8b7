// src/presentation/http/envelope.rs
//! Wire shapes of every JSON body the responder produces.
use crate::application::error::{ResponderError, ResponderResult};
use crate::application::faults::FaultDescriptor;
use crate::domain::fault::MessageBag;
use crate::domain::pagination::{LengthAwarePaginator, PaginationLinks, PaginationMeta};
use crate::domain::payload::Payload;
use serde::Serialize;
use serde_json::Value;

/// `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "data": [...], "links": {...}, "meta": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedEnvelope {
    pub data: Vec<Value>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
}

impl PaginatedEnvelope {
    pub fn from_paginator(page: LengthAwarePaginator<Payload>) -> ResponderResult<Self> {
        let links = page.links();
        let meta = page.meta();
        let data = page
            .into_items()
            .into_iter()
            .map(item_value)
            .collect::<ResponderResult<_>>()?;
        Ok(Self { data, links, meta })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub detail: String,
    pub status: u16,
    pub title: String,
}

/// `{ "errors": [{ "detail", "status", "title" }] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorObject>,
}

/// `{ "message": ..., "errors": { field: [messages] } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBagEnvelope<'a> {
    pub message: &'a str,
    pub errors: &'a MessageBag,
}

/// JSON body for a fault that maps onto an HTTP status.
pub fn fault_body(descriptor: &FaultDescriptor) -> ResponderResult<Value> {
    let body = match &descriptor.message_bag {
        Some(bag) => serde_json::to_value(MessageBagEnvelope {
            message: &descriptor.title,
            errors: bag,
        })?,
        None => serde_json::to_value(ErrorEnvelope {
            errors: vec![ErrorObject {
                detail: descriptor.message.clone(),
                status: descriptor.status.as_u16(),
                title: descriptor.title.clone(),
            }],
        })?,
    };
    Ok(body)
}

/// JSON value of a single item inside a `data` member.
pub fn item_value(payload: Payload) -> ResponderResult<Value> {
    match payload {
        Payload::Null => Ok(Value::Null),
        Payload::Bool(value) => Ok(Value::Bool(value)),
        Payload::Text(text) => Ok(Value::String(text)),
        Payload::Collection(items) => items
            .into_iter()
            .map(item_value)
            .collect::<ResponderResult<Vec<_>>>()
            .map(Value::Array),
        Payload::Paginated(page) => item_value(Payload::Collection(page.into_items())),
        Payload::Arrayable(value) => Ok(Value::Object(value.to_array())),
        Payload::Array(map) => Ok(Value::Object(map)),
        Payload::Serializable(value) => Ok(value.json_serialize()?),
        other @ (Payload::Resource(_) | Payload::Object { .. }) => {
            Err(ResponderError::unserializable(other.type_name()))
        }
    }
}

// src/application/transformer.rs
//! User supplied item -> mapping functions and how they are applied to
//! single items, collections and paginated collections.
use crate::application::error::{ResponderError, ResponderResult};
use crate::domain::payload::{ArrayWrapper, Mapping, Payload};
use std::any::{Any, type_name};
use std::marker::PhantomData;

/// Maps one item to its structured representation.
///
/// Implementations must be free of side effects: they may run for the items
/// of a collection in any order.
pub trait Transformer: Send + Sync {
    fn transform(&self, item: &Payload) -> ResponderResult<Mapping>;
}

impl<F> Transformer for F
where
    F: Fn(&Payload) -> ResponderResult<Mapping> + Send + Sync,
{
    fn transform(&self, item: &Payload) -> ResponderResult<Mapping> {
        self(item)
    }
}

/// Transformer for items of one concrete type.
pub struct TypedTransformer<T, F> {
    transform: F,
    _item: PhantomData<fn(&T)>,
}

/// Build a transformer that downcasts each item to `T` before mapping it.
pub const fn for_type<T, F>(transform: F) -> TypedTransformer<T, F>
where
    T: Any,
    F: Fn(&T) -> Mapping + Send + Sync,
{
    TypedTransformer {
        transform,
        _item: PhantomData,
    }
}

impl<T, F> Transformer for TypedTransformer<T, F>
where
    T: Any,
    F: Fn(&T) -> Mapping + Send + Sync,
{
    fn transform(&self, item: &Payload) -> ResponderResult<Mapping> {
        item.downcast_ref::<T>()
            .map(&self.transform)
            .ok_or_else(|| ResponderError::Transform {
                expected: type_name::<T>(),
                found: item.type_name(),
            })
    }
}

/// Run the transformer over a payload.
///
/// Collections and paginators are transformed item by item, in order, with
/// page metadata left alone. Anything else is treated as a single item.
/// Every output is wrapped so it carries the to-mapping capability.
pub fn transform_payload(transformer: &dyn Transformer, payload: Payload) -> ResponderResult<Payload> {
    match payload {
        Payload::Collection(items) => items
            .iter()
            .map(|item| transform_item(transformer, item))
            .collect::<ResponderResult<Vec<_>>>()
            .map(Payload::Collection),
        Payload::Paginated(page) => page
            .try_map(|item| transform_item(transformer, &item))
            .map(Payload::Paginated),
        single => transform_item(transformer, &single),
    }
}

fn transform_item(transformer: &dyn Transformer, item: &Payload) -> ResponderResult<Payload> {
    transformer
        .transform(item)
        .map(|mapping| Payload::item(ArrayWrapper::new(mapping)))
}

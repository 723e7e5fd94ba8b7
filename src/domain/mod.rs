// src/domain/mod.rs
pub mod fault;
pub mod pagination;
pub mod payload;
pub mod planet;

pub use fault::{Fault, HandlerFault, MessageBag, ValidationError};
pub use pagination::LengthAwarePaginator;
pub use payload::{ArrayWrapper, Arrayable, JsonSerializable, Mapping, Payload};

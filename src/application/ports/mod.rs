// src/application/ports/mod.rs
pub mod action;

pub use action::{Action, HasPagination};

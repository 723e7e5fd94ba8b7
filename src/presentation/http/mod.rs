// src/presentation/http/mod.rs
pub mod controllers;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod factory;
pub mod responder;
pub mod routes;
pub mod state;

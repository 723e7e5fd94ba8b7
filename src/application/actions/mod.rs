// src/application/actions/mod.rs
pub mod planets;

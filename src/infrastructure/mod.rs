// src/infrastructure/mod.rs
pub mod catalog;

// src/presentation/http/state.rs
use crate::domain::planet::PlanetCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub catalog: Arc<dyn PlanetCatalog>,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl HttpState {
    pub fn catalog(&self) -> Arc<dyn PlanetCatalog> {
        Arc::clone(&self.catalog)
    }
}

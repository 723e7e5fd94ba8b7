// src/domain/planet.rs
use crate::domain::payload::{Arrayable, Mapping};
use chrono::{DateTime, Utc};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: String,
    pub name: String,
    /// Jupiter masses.
    pub mass: f64,
    /// Light years.
    pub distance: f64,
    pub discovered_at: DateTime<Utc>,
}

impl Arrayable for Planet {
    fn to_array(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("id".into(), json!(self.id));
        map.insert("name".into(), json!(self.name));
        map.insert("mass".into(), json!(self.mass));
        map.insert("distance".into(), json!(self.distance));
        map.insert(
            "discovered_at".into(),
            json!(self.discovered_at.to_rfc3339()),
        );
        map
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanet {
    pub name: String,
    pub mass: f64,
    pub distance: f64,
}

/// Storage for the demo catalogue.
pub trait PlanetCatalog: Send + Sync {
    fn find(&self, id: &str) -> Option<Planet>;

    fn all(&self) -> Vec<Planet>;

    /// Items of the 1-based `page` plus the total number of planets.
    fn page(&self, page: u64, per_page: u64) -> (Vec<Planet>, u64);

    fn insert(&self, planet: NewPlanet) -> Planet;

    fn remove(&self, id: &str) -> bool;
}

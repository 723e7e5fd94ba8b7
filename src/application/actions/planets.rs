// src/application/actions/planets.rs
use crate::application::ports::action::{Action, HasPagination};
use crate::application::transformer::{Transformer, for_type};
use crate::domain::fault::{HandlerFault, MessageBag, ValidationError};
use crate::domain::pagination::LengthAwarePaginator;
use crate::domain::payload::{Mapping, Payload};
use crate::domain::planet::{NewPlanet, Planet, PlanetCatalog};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("Planet does not exists")]
pub struct PlanetNotFound {
    pub id: String,
}

impl HandlerFault for PlanetNotFound {
    fn code(&self) -> i64 {
        404
    }
}

pub struct ShowPlanet {
    catalog: Arc<dyn PlanetCatalog>,
}

impl ShowPlanet {
    pub fn new(catalog: Arc<dyn PlanetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, id: &str) -> Result<Planet, PlanetNotFound> {
        self.catalog
            .find(id)
            .ok_or_else(|| PlanetNotFound { id: id.to_owned() })
    }
}

impl Action for ShowPlanet {}

/// Lists the whole catalogue, or one page of it once a page was requested.
pub struct ListPlanets {
    catalog: Arc<dyn PlanetCatalog>,
    page: Option<u64>,
    page_size: u64,
    max_page_size: u64,
}

impl ListPlanets {
    pub fn new(catalog: Arc<dyn PlanetCatalog>, page_size: u64, max_page_size: u64) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            catalog,
            page: None,
            page_size: page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }

    pub const fn page(&self) -> Option<u64> {
        self.page
    }

    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn execute(&self) -> Payload {
        match self.page {
            Some(page) => {
                let (planets, total) = self.catalog.page(page, self.page_size);
                let paginator = LengthAwarePaginator::new(planets, total, self.page_size, page);
                Payload::Paginated(paginator.map(Payload::item))
            }
            None => Payload::items(self.catalog.all()),
        }
    }
}

impl HasPagination for ListPlanets {
    fn set_page(&mut self, page: u64) {
        self.page = Some(page.max(1));
    }

    fn set_page_size(&mut self, page_size: u64) {
        self.page_size = page_size.clamp(1, self.max_page_size);
    }
}

impl Action for ListPlanets {
    fn as_paginated(&mut self) -> Option<&mut dyn HasPagination> {
        Some(self)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanetInput {
    pub name: Option<String>,
    pub mass: Option<f64>,
    pub distance: Option<f64>,
}

pub struct CreatePlanet {
    catalog: Arc<dyn PlanetCatalog>,
}

impl CreatePlanet {
    pub fn new(catalog: Arc<dyn PlanetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, input: CreatePlanetInput) -> Result<Planet, ValidationError> {
        let mut errors = MessageBag::new();

        let name = input
            .name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        if name.is_none() {
            errors.add("name", "The name field is required.");
        }
        let mass = positive_number(&mut errors, "mass", input.mass);
        let distance = positive_number(&mut errors, "distance", input.distance);

        match (name, mass, distance) {
            (Some(name), Some(mass), Some(distance)) if errors.is_empty() => {
                Ok(self.catalog.insert(NewPlanet {
                    name,
                    mass,
                    distance,
                }))
            }
            _ => Err(ValidationError::new(errors)),
        }
    }
}

impl Action for CreatePlanet {}

fn positive_number(errors: &mut MessageBag, field: &str, value: Option<f64>) -> Option<f64> {
    match value {
        None => {
            errors.add(field, format!("The {field} field is required."));
            None
        }
        Some(number) if !number.is_finite() || number <= 0.0 => {
            errors.add(field, format!("The {field} must be greater than 0."));
            None
        }
        Some(number) => Some(number),
    }
}

pub struct DeletePlanet {
    catalog: Arc<dyn PlanetCatalog>,
}

impl DeletePlanet {
    pub fn new(catalog: Arc<dyn PlanetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, id: &str) -> Result<bool, PlanetNotFound> {
        if self.catalog.remove(id) {
            Ok(true)
        } else {
            Err(PlanetNotFound { id: id.to_owned() })
        }
    }
}

impl Action for DeletePlanet {}

/// Compact planet representation used by the catalogue listing.
pub fn planet_summary() -> impl Transformer {
    for_type(|planet: &Planet| {
        let mut map = Mapping::new();
        map.insert("id".into(), json!(planet.id));
        map.insert("name".into(), json!(planet.name));
        map.insert("distance_ly".into(), json!(planet.distance));
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::InMemoryPlanetCatalog;

    fn catalog(size: usize) -> Arc<dyn PlanetCatalog> {
        Arc::new(InMemoryPlanetCatalog::generate(size))
    }

    #[test]
    fn list_returns_a_collection_until_a_page_is_set() {
        let mut action = ListPlanets::new(catalog(23), 15, 100);
        assert!(matches!(action.execute(), Payload::Collection(ref items) if items.len() == 23));

        action.set_page(2);
        let Payload::Paginated(page) = action.execute() else {
            panic!("expected paginator");
        };
        assert_eq!(page.len(), 8);
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.total(), 23);
    }

    #[test]
    fn page_size_is_clamped() {
        let mut action = ListPlanets::new(catalog(1), 15, 50);
        action.set_page_size(500);
        assert_eq!(action.page_size(), 50);
        action.set_page_size(0);
        assert_eq!(action.page_size(), 1);
        action.set_page(0);
        assert_eq!(action.page(), Some(1));
    }

    #[test]
    fn show_reports_missing_planets() {
        let err = ShowPlanet::new(catalog(1)).execute("nope").unwrap_err();
        assert_eq!(err.code(), 404);
        assert_eq!(err.to_string(), "Planet does not exists");
        assert_eq!(err.title(), "PlanetNotFound");
    }

    #[test]
    fn create_collects_every_validation_message() {
        let action = CreatePlanet::new(catalog(0));
        let err = action
            .execute(CreatePlanetInput {
                name: Some("  ".into()),
                mass: Some(-1.0),
                distance: None,
            })
            .unwrap_err();
        assert_eq!(err.errors().get("name"), ["The name field is required."]);
        assert_eq!(err.errors().get("mass"), ["The mass must be greater than 0."]);
        assert_eq!(err.errors().get("distance"), ["The distance field is required."]);
    }

    #[test]
    fn create_then_delete() {
        let catalog = catalog(0);
        let planet = CreatePlanet::new(Arc::clone(&catalog))
            .execute(CreatePlanetInput {
                name: Some("Kepler-22b".into()),
                mass: Some(0.1),
                distance: Some(620.0),
            })
            .unwrap();
        assert_eq!(catalog.find(&planet.id), Some(planet.clone()));

        let delete = DeletePlanet::new(Arc::clone(&catalog));
        assert!(delete.execute(&planet.id).unwrap());
        assert!(delete.execute(&planet.id).is_err());
    }
}

// src/infrastructure/catalog.rs
use crate::domain::planet::{NewPlanet, Planet, PlanetCatalog};
use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

const FAMILIES: [&str; 3] = ["Gliese", "Kepler", "Trappist"];
const SUFFIXES: [char; 8] = ['b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];
const EPOCH_2000: i64 = 946_684_800;
const DAY: i64 = 86_400;

/// Process-local planet catalogue.
#[derive(Debug, Default)]
pub struct InMemoryPlanetCatalog {
    planets: RwLock<Vec<Planet>>,
}

impl InMemoryPlanetCatalog {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self {
            planets: RwLock::new(planets),
        }
    }

    /// Catalogue of `count` planets whose names, masses, distances and
    /// discovery dates are derived from their position.
    pub fn generate(count: usize) -> Self {
        Self::new((0..count).map(synthesize).collect())
    }
}

/// Exact for every value below `100_000`.
fn scaled(value: u64) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}

fn synthesize(index: usize) -> Planet {
    let seed = u64::try_from(index).unwrap_or_default();
    let family = FAMILIES[index % FAMILIES.len()];
    let suffix = SUFFIXES[index % SUFFIXES.len()];
    let days = i64::try_from(seed * 61 % 9_000).unwrap_or_default();

    Planet {
        id: Uuid::new_v4().to_string(),
        name: format!("{family}-{}{suffix}", seed * 37 % 999 + 1),
        mass: scaled(seed * 7_919 % 100_000) / 1_000.0 + 0.001,
        distance: scaled(seed * 104_729 % 99_950) / 100.0 + 0.5,
        discovered_at: DateTime::<Utc>::from_timestamp(EPOCH_2000 + days * DAY, 0)
            .unwrap_or_default(),
    }
}

impl PlanetCatalog for InMemoryPlanetCatalog {
    fn find(&self, id: &str) -> Option<Planet> {
        let planets = self.planets.read().unwrap_or_else(PoisonError::into_inner);
        planets.iter().find(|planet| planet.id == id).cloned()
    }

    fn all(&self) -> Vec<Planet> {
        self.planets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn page(&self, page: u64, per_page: u64) -> (Vec<Planet>, u64) {
        let planets = self.planets.read().unwrap_or_else(PoisonError::into_inner);
        let per_page = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);
        let skip = usize::try_from(page.max(1) - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(per_page);
        let items = planets.iter().skip(skip).take(per_page).cloned().collect();
        (items, u64::try_from(planets.len()).unwrap_or(u64::MAX))
    }

    fn insert(&self, planet: NewPlanet) -> Planet {
        let planet = Planet {
            id: Uuid::new_v4().to_string(),
            name: planet.name,
            mass: planet.mass,
            distance: planet.distance,
            discovered_at: Utc::now(),
        };
        self.planets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(planet.clone());
        tracing::debug!(id = %planet.id, "planet added to catalogue");
        planet
    }

    fn remove(&self, id: &str) -> bool {
        let mut planets = self.planets.write().unwrap_or_else(PoisonError::into_inner);
        let before = planets.len();
        planets.retain(|planet| planet.id != id);
        planets.len() != before
    }
}

//! Real Paris attractions for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, visitable
//! places a day itinerary would plausibly string together.

/// A named place with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// Central Paris attractions
// ============================================================================

pub const ATTRACTIONS: &[Place] = &[
    Place::new("Eiffel Tower", 48.8584, 2.2945),
    Place::new("Louvre Museum", 48.8606, 2.3376),
    Place::new("Notre-Dame", 48.8530, 2.3499),
    Place::new("Arc de Triomphe", 48.8738, 2.2950),
    Place::new("Sacre-Coeur", 48.8867, 2.3431),
    Place::new("Musee d'Orsay", 48.8600, 2.3266),
    Place::new("Pantheon", 48.8462, 2.3464),
    Place::new("Jardin du Luxembourg", 48.8462, 2.3372),
];

// ============================================================================
// Day trips outside the city
// ============================================================================

pub const DAY_TRIPS: &[Place] = &[
    Place::new("Palace of Versailles", 48.8049, 2.1204),
    Place::new("Disneyland Paris", 48.8722, 2.7758),
];

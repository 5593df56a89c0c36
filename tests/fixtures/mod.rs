//! Test fixtures for route-optimizer.
//!
//! Provides real Paris attraction coordinates (from OpenStreetMap) for
//! realistic day-itinerary tests.

pub mod paris_locations;

pub use paris_locations::*;

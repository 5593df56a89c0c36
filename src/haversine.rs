//! Haversine travel matrix provider (fallback when the routing API is
//! unavailable or unconfigured).
//!
//! Uses great-circle distance to estimate travel time. Less accurate than
//! a routing API (ignores roads) but deterministic, pure, and always
//! available.

use crate::matrix::TravelMatrix;
use crate::traits::{Coordinate, TravelMatrixProvider};

/// Average urban driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based travel matrix provider.
///
/// Estimates travel time using straight-line distance and an assumed speed.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineMatrix {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Estimated (meters, seconds) for a single pair. Used both for whole
    /// matrices and for patching individual failed API cells.
    pub fn estimate(&self, from: Coordinate, to: Coordinate) -> (f64, f64) {
        let km = Self::haversine_km(from, to);
        let seconds = km / self.speed_kmh * 3600.0;
        (km * 1000.0, seconds)
    }
}

impl TravelMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> TravelMatrix {
        let n = locations.len();
        let mut matrix = TravelMatrix::zeroed(n);

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    let (meters, seconds) = self.estimate(*from, *to);
                    matrix.set(i, j, meters, seconds);
                }
            }
        }

        matrix
    }
}

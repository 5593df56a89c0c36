//! Core domain types and traits for the route optimizer.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement [`Activity`] for their own itinerary records.

use crate::matrix::TravelMatrix;

/// A geographic point (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are real numbers (no NaN/infinity).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// An itinerary entry to be reordered. Consumed as an immutable value;
/// the optimizer never mutates, drops, or duplicates activities.
pub trait Activity {
    /// Display label, used only for segment reporting.
    fn title(&self) -> &str;

    /// Geographic position, if known. Activities without one are kept
    /// out of the routed tour but preserved in the output.
    fn coordinate(&self) -> Option<Coordinate>;
}

/// Provides a pairwise distance/duration matrix for a set of locations.
///
/// The matrix is indexed by the provided location order. Implementations
/// must always return a usable matrix: failures degrade to an estimate
/// rather than surfacing as errors.
pub trait TravelMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> TravelMatrix;
}

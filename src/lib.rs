//! route-optimizer core
//!
//! Reorders a single day's activities to minimize total inter-activity
//! travel time: routing-API travel matrix (with a great-circle fallback),
//! nearest-neighbor construction, 2-opt local search.

pub mod traits;
pub mod matrix;
pub mod haversine;
pub mod api;
pub mod tour;
pub mod optimizer;

//! Routing-API HTTP adapter for travel matrices.
//!
//! Issues a single batched all-pairs request (origins == destinations,
//! driving profile) and parses a per-cell status. Any failure — transport
//! error, bad payload, unresolved cell — degrades to the haversine
//! estimate instead of surfacing an error.

use serde::Deserialize;

use crate::haversine::HaversineMatrix;
use crate::matrix::TravelMatrix;
use crate::traits::{Coordinate, TravelMatrixProvider};

#[derive(Debug, Clone)]
pub struct RoutingApiConfig {
    pub base_url: String,
    /// API credential. With `None` the client skips the network entirely
    /// and computes the geometric estimate.
    pub api_key: Option<String>,
    /// Routing profile, e.g. "driving".
    pub mode: String,
    pub timeout_secs: u64,
}

impl Default for RoutingApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/distancematrix/json".to_string(),
            api_key: None,
            mode: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutingApiClient {
    config: RoutingApiConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineMatrix,
}

impl RoutingApiClient {
    pub fn new(config: RoutingApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineMatrix::default(),
        })
    }

    pub fn with_fallback(mut self, fallback: HaversineMatrix) -> Self {
        self.fallback = fallback;
        self
    }

    fn fetch(&self, api_key: &str, locations: &[Coordinate]) -> Result<MatrixResponse, reqwest::Error> {
        let coords = locations
            .iter()
            .map(|c| format!("{:.6},{:.6}", c.lat, c.lng))
            .collect::<Vec<_>>()
            .join("|");

        self.client
            .get(&self.config.base_url)
            .query(&[
                ("origins", coords.as_str()),
                ("destinations", coords.as_str()),
                ("mode", self.config.mode.as_str()),
                ("key", api_key),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<MatrixResponse>())
    }
}

impl TravelMatrixProvider for RoutingApiClient {
    fn matrix_for(&self, locations: &[Coordinate]) -> TravelMatrix {
        if locations.is_empty() {
            return TravelMatrix::default();
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            return self.fallback.matrix_for(locations);
        };

        match self.fetch(api_key, locations) {
            Ok(body) if body.status == "OK" => matrix_from_response(&body, locations, &self.fallback),
            Ok(body) => {
                tracing::warn!(status = %body.status, "routing API rejected matrix request, using haversine estimate");
                self.fallback.matrix_for(locations)
            }
            Err(err) => {
                tracing::warn!(error = %err, "routing API request failed, using haversine estimate");
                self.fallback.matrix_for(locations)
            }
        }
    }
}

/// Build a [`TravelMatrix`] from an API response, patching any cell the API
/// could not resolve with the geometric estimate for that specific pair.
/// A zero default would make the hop look free and bias the optimizer
/// toward it.
fn matrix_from_response(
    body: &MatrixResponse,
    locations: &[Coordinate],
    fallback: &HaversineMatrix,
) -> TravelMatrix {
    let n = locations.len();
    let mut matrix = TravelMatrix::zeroed(n);

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let cell = body
                .rows
                .get(i)
                .and_then(|row| row.elements.get(j))
                .and_then(MatrixElement::resolved);

            match cell {
                Some((meters, seconds)) => matrix.set(i, j, meters, seconds),
                None => {
                    tracing::debug!(from = i, to = j, "unresolved matrix cell, using haversine estimate");
                    let (meters, seconds) = fallback.estimate(locations[i], locations[j]);
                    matrix.set(i, j, meters, seconds);
                }
            }
        }
    }

    matrix
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    status: String,
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<ValueField>,
    duration: Option<ValueField>,
}

impl MatrixElement {
    /// (meters, seconds) if the API marked this pair successful.
    fn resolved(&self) -> Option<(f64, f64)> {
        if self.status != "OK" {
            return None;
        }
        Some((self.distance.as_ref()?.value, self.duration.as_ref()?.value))
    }
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: f64,
}

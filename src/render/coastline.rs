//! Embedded world coastlines.
//!
//! A coarse outline of the continents, the larger islands and the two big
//! inland seas, stored as closed lon/lat rings in `assets/coastlines.json`.
//! No ring crosses the antimeridian, so rings can be projected point by point.

use crate::error::{Error, Result};
use geo::Point;
use serde::Deserialize;

const COASTLINES_JSON: &str = include_str!("../../assets/coastlines.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Coastlines {
    pub resolution: String,
    pub rings: Vec<Ring>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ring {
    pub name: String,
    /// `[lon, lat]` pairs, first point repeated at the end.
    pub points: Vec<[f64; 2]>,
}

impl Ring {
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|&[lon, lat]| Point::new(lon, lat))
    }
}

/// Parse the embedded coastline set.
pub fn world() -> Result<Coastlines> {
    serde_json::from_str(COASTLINES_JSON)
        .map_err(|e| Error::Render(format!("embedded coastline data is invalid: {e}")))
}

//! Graph file (graph.json) schema and validation.
//!
//! JSON shape:
//! {
//!   "Nodes": [ { "Lat": 47.6, "Lon": -122.3 }, ... ],
//!   "Links": [ { "Src": 0, "Dst": 1 }, ... ],
//!   "TransitOnly": [ 3, 7 ]        // optional
//! }
//!
//! Nodes are identified by their position in `Nodes`. We check every index
//! and coordinate up front so the renderer never has to.

use crate::error::{Error, Result};
use crate::graph::{Graph, Link};
use geo::Point;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GraphSpec {
    pub nodes: Vec<RawNode>,

    pub links: Vec<RawLink>,

    #[serde(default)]
    pub transit_only: Vec<usize>,
}

/// Raw node shape as it appears in graph.json.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawNode {
    pub lat: f64,
    pub lon: f64,
}

/// Raw link shape as it appears in graph.json.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawLink {
    pub src: usize,
    pub dst: usize,
}

impl GraphSpec {
    /// Parse graph.json text. Syntax and schema failures are data errors.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Data(format!("invalid graph json: {e}")))
    }

    /// Check coordinates and indices, and build the typed graph.
    pub fn validate_and_build(&self) -> Result<Graph> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for (i, raw) in self.nodes.iter().enumerate() {
            if !raw.lat.is_finite() || !(-90.0..=90.0).contains(&raw.lat) {
                return Err(Error::Data(format!(
                    "node {i} has latitude {} outside [-90, 90]",
                    raw.lat
                )));
            }
            if !raw.lon.is_finite() || !(-180.0..=180.0).contains(&raw.lon) {
                return Err(Error::Data(format!(
                    "node {i} has longitude {} outside [-180, 180]",
                    raw.lon
                )));
            }
            nodes.push(Point::new(raw.lon, raw.lat));
        }

        let n = nodes.len();
        let mut links = Vec::with_capacity(self.links.len());
        for (i, raw) in self.links.iter().enumerate() {
            if raw.src >= n {
                return Err(Error::Data(format!(
                    "link {i} references missing src node {} (graph has {n} nodes)",
                    raw.src
                )));
            }
            if raw.dst >= n {
                return Err(Error::Data(format!(
                    "link {i} references missing dst node {} (graph has {n} nodes)",
                    raw.dst
                )));
            }
            links.push(Link {
                src: raw.src,
                dst: raw.dst,
            });
        }

        for &t in &self.transit_only {
            if t >= n {
                return Err(Error::Data(format!(
                    "TransitOnly references missing node {t} (graph has {n} nodes)"
                )));
            }
        }
        let mut transit_only = self.transit_only.clone();
        transit_only.sort_unstable();
        transit_only.dedup();

        Ok(Graph {
            nodes,
            links,
            transit_only,
        })
    }
}

//! Graph layer: JSON schema plus the in-memory graph.

pub mod spec;

pub use spec::{GraphSpec, RawLink, RawNode};

use crate::error::{Error, Result};
use geo::Point;
use std::fs;
use std::path::Path;

/// An undirected connection between two nodes, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub src: usize,
    pub dst: usize,
}

/// Nodes (x = lon, y = lat), links and transit-only markers.
///
/// Graphs built by `GraphSpec::validate_and_build` are always consistent.
/// Hand-built graphs are checked again by `check_indices` before drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Point>,
    pub links: Vec<Link>,
    /// Sorted, deduplicated indices of transit-only nodes.
    pub transit_only: Vec<usize>,
}

impl Graph {
    fn node(&self, index: usize, what: &str) -> Result<Point> {
        self.nodes.get(index).copied().ok_or_else(|| {
            Error::Data(format!(
                "{what} references missing node {index} (graph has {} nodes)",
                self.nodes.len()
            ))
        })
    }

    /// Endpoint coordinates of a link.
    pub fn endpoints(&self, link: &Link) -> Result<(Point, Point)> {
        Ok((self.node(link.src, "link src")?, self.node(link.dst, "link dst")?))
    }

    pub fn is_transit(&self, index: usize) -> bool {
        self.transit_only.binary_search(&index).is_ok()
    }

    /// Fail with a data error if any link or transit index is out of range.
    pub fn check_indices(&self) -> Result<()> {
        for link in &self.links {
            self.endpoints(link)?;
        }
        for &t in &self.transit_only {
            self.node(t, "TransitOnly")?;
        }
        if self.transit_only.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::Data("TransitOnly must be sorted and unique".to_string()));
        }
        Ok(())
    }
}

/// Read and validate a graph file.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let spec = GraphSpec::from_json(&text)?;
    log::debug!(
        "parsed {}: {} nodes, {} links",
        path.display(),
        spec.nodes.len(),
        spec.links.len()
    );
    spec.validate_and_build()
}

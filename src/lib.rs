//! Render a geographic graph (nodes at lat/lon, links between them) onto a
//! world coastline map, with links drawn as great-circle arcs.

pub mod error;
pub mod geodesy;
pub mod graph;
pub mod render;
pub mod style;

pub use error::{Error, Result};
pub use graph::{Graph, GraphSpec, Link, load_graph};
pub use render::{RenderSummary, render, render_file};

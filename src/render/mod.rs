//! Rendering: draw a graph over a world map and export it.

pub mod canvas;
pub mod coastline;
pub mod export;

pub use canvas::MapCanvas;
pub use export::OutputFormat;

use crate::error::Result;
use crate::geodesy::great_circle_distance_km;
use crate::graph::{Graph, load_graph};
use crate::style::MapStyle;
use std::path::Path;

/// What a render produced. Used for reporting only.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub format: OutputFormat,
    pub nodes: usize,
    pub links: usize,
    pub transit_nodes: usize,
    pub total_link_km: f64,
}

/// Draw coastlines, then every link, then every node, in input order.
///
/// Indices are checked before anything is drawn.
pub fn draw_graph(canvas: &mut MapCanvas, graph: &Graph) -> Result<()> {
    graph.check_indices()?;

    let coast = coastline::world()?;
    for ring in &coast.rings {
        let points: Vec<_> = ring.positions().collect();
        canvas.draw_coastline(&points);
    }
    log::debug!("drew {} coastline rings", coast.rings.len());

    for link in &graph.links {
        let (src, dst) = graph.endpoints(link)?;
        canvas.draw_geodesic(src, dst);
    }
    for (i, &node) in graph.nodes.iter().enumerate() {
        if graph.is_transit(i) {
            canvas.draw_transit_marker(node);
        } else {
            canvas.draw_marker(node);
        }
    }
    log::debug!(
        "drew {} links and {} nodes ({} transit-only)",
        canvas.line_count(),
        canvas.marker_count(),
        canvas.transit_marker_count()
    );
    Ok(())
}

/// Render `graph` to an image at `output_path`.
///
/// The output format is taken from the extension and checked before any
/// drawing happens. The canvas lives only for the duration of this call.
pub fn render(graph: &Graph, output_path: &Path) -> Result<RenderSummary> {
    let format = OutputFormat::from_path(output_path)?;

    let mut canvas = MapCanvas::new(MapStyle::default());
    draw_graph(&mut canvas, graph)?;
    let svg = canvas.finish();

    format.write(&svg, output_path)?;

    let mut total_link_km = 0.0;
    for link in &graph.links {
        let (a, b) = graph.endpoints(link)?;
        total_link_km += great_circle_distance_km(a, b);
    }

    let summary = RenderSummary {
        format,
        nodes: graph.nodes.len(),
        links: graph.links.len(),
        transit_nodes: graph.transit_only.len(),
        total_link_km,
    };
    log::info!(
        "rendered {} nodes ({} transit-only), {} links totalling {:.0} km to {}",
        summary.nodes,
        summary.transit_nodes,
        summary.links,
        summary.total_link_km,
        output_path.display()
    );
    Ok(summary)
}

/// Load a graph file and render it.
pub fn render_file(input_path: &Path, output_path: &Path) -> Result<RenderSummary> {
    let graph = load_graph(input_path)?;
    render(&graph, output_path)
}

//! Map canvas: an SVG document under construction.
//!
//! Every primitive is appended in call order, grouped into consecutive
//! layers, so later calls paint over earlier ones. Nothing here touches the
//! filesystem; `finish` hands the document to the exporter.

use crate::geodesy::{PlateCarree, Point, interpolate_great_circle, split_at_antimeridian};
use crate::style::MapStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Coastlines,
    Links,
    Nodes,
    Transit,
}

#[derive(Debug)]
pub struct MapCanvas {
    style: MapStyle,
    projection: PlateCarree,
    body: String,
    layer: Option<Layer>,
    lines: usize,
    markers: usize,
    transit_markers: usize,
}

fn num(v: f64) -> String {
    format!("{v:.2}")
}

impl MapCanvas {
    pub fn new(style: MapStyle) -> Self {
        let projection =
            PlateCarree::new(style.margin, style.margin, style.map_width, style.map_height);
        Self {
            style,
            projection,
            body: String::new(),
            layer: None,
            lines: 0,
            markers: 0,
            transit_markers: 0,
        }
    }

    /// Number of geodesic lines drawn so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Number of node markers drawn so far, transit-only ones included.
    pub fn marker_count(&self) -> usize {
        self.markers
    }

    pub fn transit_marker_count(&self) -> usize {
        self.transit_markers
    }

    fn enter(&mut self, layer: Layer) {
        if self.layer == Some(layer) {
            return;
        }
        if self.layer.is_some() {
            self.body.push_str("  </g>\n");
        }
        let s = &self.style;
        let open = match layer {
            Layer::Coastlines => format!(
                "  <g class=\"coastlines\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\">\n",
                s.coastline_color, s.coastline_width
            ),
            Layer::Links => format!(
                "  <g class=\"links\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\">\n",
                s.link_color, s.link_width
            ),
            Layer::Nodes => format!("  <g class=\"nodes\" fill=\"{}\">\n", s.node_color),
            Layer::Transit => format!(
                "  <g class=\"transit\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\">\n",
                s.node_color, s.transit_outline_color, s.transit_outline_width
            ),
        };
        self.body.push_str(&open);
        self.layer = Some(layer);
    }

    fn path_data(&self, piece: &[Point], out: &mut String) {
        for (i, &p) in piece.iter().enumerate() {
            let (x, y) = self.projection.project(p);
            out.push_str(if i == 0 { "M" } else { " L" });
            out.push_str(&num(x));
            out.push(' ');
            out.push_str(&num(y));
        }
    }

    /// Draw one closed coastline ring, straight in projected space.
    pub fn draw_coastline(&mut self, ring: &[Point]) {
        if ring.len() < 2 {
            return;
        }
        self.enter(Layer::Coastlines);
        let mut d = String::new();
        self.path_data(ring, &mut d);
        d.push_str(" Z");
        self.body.push_str(&format!("    <path d=\"{d}\"/>\n"));
    }

    /// Draw the great-circle arc between two points. An arc that leaves one
    /// side of the map re-enters on the other, as a second subpath of the
    /// same element.
    pub fn draw_geodesic(&mut self, from: Point, to: Point) {
        self.enter(Layer::Links);
        let samples = interpolate_great_circle(from, to);
        let mut d = String::new();
        for piece in split_at_antimeridian(&samples) {
            if !d.is_empty() {
                d.push(' ');
            }
            self.path_data(&piece, &mut d);
        }
        self.body
            .push_str(&format!("    <path class=\"link\" d=\"{d}\"/>\n"));
        self.lines += 1;
    }

    fn circle(&mut self, class: &str, at: Point, r: f64) {
        let (x, y) = self.projection.project(at);
        self.body.push_str(&format!(
            "    <circle class=\"{class}\" cx=\"{}\" cy=\"{}\" r=\"{r}\"/>\n",
            num(x),
            num(y)
        ));
        self.markers += 1;
    }

    /// Draw a filled circular marker.
    pub fn draw_marker(&mut self, at: Point) {
        self.enter(Layer::Nodes);
        self.circle("node", at, self.style.node_radius);
    }

    /// Draw a transit-only node: same fill, slightly larger, outlined.
    pub fn draw_transit_marker(&mut self, at: Point) {
        self.enter(Layer::Transit);
        self.circle("transit-node", at, self.style.transit_radius);
        self.transit_markers += 1;
    }

    /// Close the document. The canvas is consumed.
    pub fn finish(mut self) -> String {
        if self.layer.take().is_some() {
            self.body.push_str("  </g>\n");
        }

        let s = &self.style;
        let (w, h) = (s.canvas_width(), s.canvas_height());
        let mut svg = String::with_capacity(self.body.len() + 1024);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        ));
        svg.push_str(&format!(
            "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
            s.background
        ));
        svg.push_str(&format!(
            "<defs><clipPath id=\"map\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath></defs>\n",
            s.margin, s.margin, s.map_width, s.map_height
        ));
        svg.push_str("<g clip-path=\"url(#map)\">\n");
        svg.push_str(&self.body);
        svg.push_str("</g>\n");
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            s.margin, s.margin, s.map_width, s.map_height, s.frame_color, s.frame_width
        ));
        svg.push_str("</svg>\n");
        svg
    }
}

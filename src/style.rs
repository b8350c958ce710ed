//! Fixed styling for the rendered map.
//!
//! Sizes are in canvas pixels. The map area is exactly 2:1 so that one
//! degree of longitude and one degree of latitude cover the same length.

#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub map_width: f64,
    pub map_height: f64,
    pub margin: f64,

    pub background: &'static str,
    pub frame_color: &'static str,
    pub frame_width: f64,

    pub coastline_color: &'static str,
    pub coastline_width: f64,

    pub link_color: &'static str,
    pub link_width: f64,

    pub node_color: &'static str,
    pub node_radius: f64,

    pub transit_radius: f64,
    pub transit_outline_color: &'static str,
    pub transit_outline_width: f64,
}

impl MapStyle {
    pub fn canvas_width(&self) -> f64 {
        self.map_width + 2.0 * self.margin
    }

    pub fn canvas_height(&self) -> f64 {
        self.map_height + 2.0 * self.margin
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            map_width: 720.0,
            map_height: 360.0,
            margin: 20.0,

            background: "#ffffff",
            frame_color: "#000000",
            frame_width: 0.8,

            coastline_color: "#000000",
            coastline_width: 0.8,

            link_color: "#ffa500",
            link_width: 0.5,

            node_color: "#0000ff",
            node_radius: 2.0,

            transit_radius: 2.5,
            transit_outline_color: "#000000",
            transit_outline_width: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_area_keeps_two_to_one_aspect() {
        let style = MapStyle::default();
        assert_eq!(style.map_width, 2.0 * style.map_height);
        assert_eq!(style.canvas_width(), 760.0);
        assert_eq!(style.canvas_height(), 400.0);
    }
}

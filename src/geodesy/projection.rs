use geo::Point;

/// Equirectangular projection onto a pixel rectangle.
///
/// Longitude -180..180 maps to `x0..x0 + width`, latitude 90..-90 maps to
/// `y0..y0 + height` (canvas y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCarree {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl PlateCarree {
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    pub fn project(&self, p: Point) -> (f64, f64) {
        let x = self.x0 + (p.x() + 180.0) / 360.0 * self.width;
        let y = self.y0 + (90.0 - p.y()) / 180.0 * self.height;
        (x, y)
    }
}

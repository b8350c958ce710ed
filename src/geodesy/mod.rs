//! Geographic primitives: great-circle geometry and the map projection used
//! by the canvas.
//!
//! Positions are `geo::Point<f64>` with `x` = longitude and `y` = latitude,
//! both in degrees.

pub mod great_circle;
pub mod projection;

pub use geo::Point;
pub use great_circle::{great_circle_distance_km, interpolate_great_circle, split_at_antimeridian};
pub use projection::PlateCarree;

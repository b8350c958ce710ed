//! Great-circle distance and interpolation on a spherical earth.

use geo::{Distance, Haversine, InterpolatePoint, Point};

/// Approximate arc length of one degree on the mean sphere, in meters.
const METERS_PER_DEGREE: f64 = 111_195.0;

/// Spacing between interpolated samples, in degrees of arc.
const SAMPLE_STEP_DEG: f64 = 1.0;

/// Below this separation (meters) two endpoints are the same place.
const COINCIDENT_M: f64 = 1e-6;

/// Haversine distance between two points in kilometers.
pub fn great_circle_distance_km(a: Point, b: Point) -> f64 {
    Haversine::distance(a, b) / 1000.0
}

fn is_antipodal(a: Point, b: Point) -> bool {
    const EPS: f64 = 1e-9;
    if (a.y() + b.y()).abs() > EPS {
        return false;
    }
    if a.y().abs() > 90.0 - EPS {
        return true;
    }
    let d_lon = (a.x() - b.x()).abs() % 360.0;
    (d_lon - 180.0).abs() < EPS
}

/// Samples strictly between `a` and `b`, one per degree of arc.
fn interior_samples(a: Point, b: Point, out: &mut Vec<Point>) {
    let arc_deg = Haversine::distance(a, b) / METERS_PER_DEGREE;
    let segments = (arc_deg / SAMPLE_STEP_DEG).ceil().max(1.0) as usize;
    for i in 1..segments {
        let ratio = i as f64 / segments as f64;
        out.push(Haversine::point_at_ratio_between(a, b, ratio));
    }
}

/// Sample the shortest great-circle arc from `a` to `b`.
///
/// The result always starts with `a` and ends with `b`. Coincident endpoints
/// (including the same place written as lon 180 and lon -180) give `[a, a]`.
/// For antipodal endpoints, where every great circle through both points is
/// equally short, the arc through the north pole is used.
pub fn interpolate_great_circle(a: Point, b: Point) -> Vec<Point> {
    if Haversine::distance(a, b) < COINCIDENT_M {
        return vec![a, a];
    }

    let mut out = vec![a];
    if is_antipodal(a, b) {
        let via = if a.y().abs() < 90.0 {
            Point::new(a.x(), 90.0)
        } else {
            Point::new(a.x(), 0.0)
        };
        interior_samples(a, via, &mut out);
        out.push(via);
        interior_samples(via, b, &mut out);
    } else {
        interior_samples(a, b, &mut out);
    }
    out.push(b);
    out
}

/// Break a sampled path wherever consecutive samples jump across the
/// antimeridian, closing each piece at the map edge.
pub fn split_at_antimeridian(points: &[Point]) -> Vec<Vec<Point>> {
    let mut pieces: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &p in points {
        if let Some(&prev) = current.last() {
            let d_lon = p.x() - prev.x();
            if d_lon.abs() > 180.0 {
                // Unwrap `p` next to `prev`, then find where the edge is crossed.
                let edge = if d_lon < 0.0 { 180.0 } else { -180.0 };
                let unwrapped = if d_lon < 0.0 { p.x() + 360.0 } else { p.x() - 360.0 };
                let span = unwrapped - prev.x();
                // Both samples on the edge meridian: they are the same line.
                let t = if span.abs() < 1e-12 { 0.0 } else { (edge - prev.x()) / span };
                let lat = prev.y() + t * (p.y() - prev.y());

                current.push(Point::new(edge, lat));
                pieces.push(std::mem::take(&mut current));
                current.push(Point::new(-edge, lat));
            }
        }
        current.push(p);
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

//! Ring measures: signed area, orientation sign, perimeter
//!
//! The simplification algorithms use the *sign* of a ring's area as the
//! topological invariant to preserve, and its perimeter to decide whether a
//! ring is too small to simplify at a given tolerance.

use geo::{Euclidean, Length};
use geo_types::LineString;

/// Signed area of a ring by the shoelace formula.
///
/// Counter-clockwise rings have positive area. The ring may be closed
/// (first point repeated last, the `geo` convention) or open; the closing
/// edge is implied either way.
pub fn ring_signed_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    if coords.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..coords.len() {
        let p = coords[i];
        let q = coords[(i + 1) % coords.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Sign of an area value: -1, 0 or +1.
pub fn area_sign(area: f64) -> i32 {
    if area > 0.0 {
        1
    } else if area < 0.0 {
        -1
    } else {
        0
    }
}

/// Perimeter of a ring.
///
/// Euclidean length of the ring's edges in CRS units. An unclosed ring is
/// measured as given (no implied closing edge).
pub fn ring_perimeter(ring: &LineString<f64>) -> f64 {
    Euclidean.length(ring)
}

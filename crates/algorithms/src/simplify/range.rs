//! Range policy: simplification of open point sequences
//!
//! Wraps the Douglas-Peucker core with the degenerate-input and
//! minimum-size rules shared by linestrings (minimum size 2) and rotated
//! rings (minimum size 0).

use geo_types::Coord;
use simpligis_core::DistanceStrategy;

use super::douglas_peucker::douglas_peucker;

/// A two-point sequence whose points are exactly equal.
///
/// Equality is exact coordinate equality, not distance-based.
pub(crate) fn is_degenerate(coords: &[Coord<f64>]) -> bool {
    coords.len() == 2 && coords[0] == coords[1]
}

/// Append-style range simplification.
///
/// Degenerate input collapses to its first point; inputs of 2 or fewer
/// points, or a negative tolerance, are copied verbatim. No post-pass is
/// applied to `out` (callers appending into shared storage must decide
/// themselves whether a degenerate tail should collapse).
pub(crate) fn simplify_range_into<S: DistanceStrategy>(
    coords: &[Coord<f64>],
    max_distance: f64,
    strategy: &S,
    out: &mut Vec<Coord<f64>>,
) {
    if is_degenerate(coords) {
        out.push(coords[0]);
    } else if coords.len() <= 2 || max_distance < 0.0 {
        out.extend_from_slice(coords);
    } else {
        out.extend(douglas_peucker(coords, max_distance, strategy));
    }
}

/// Range policy.
///
/// `minimum_size` is 2 for linestrings and 0 for ring interiors. The
/// post-pass collapses a degenerate two-point result to a single point,
/// which can legally leave the output below `minimum_size`.
pub(crate) fn simplify_range<S: DistanceStrategy>(
    coords: &[Coord<f64>],
    max_distance: f64,
    minimum_size: usize,
    strategy: &S,
) -> Vec<Coord<f64>> {
    let mut out = Vec::new();

    if coords.len() <= minimum_size || max_distance < 0.0 {
        out.extend_from_slice(coords);
    } else {
        simplify_range_into(coords, max_distance, strategy, &mut out);
    }

    // Verify the two remaining points are not equal. If they are, keep one.
    if is_degenerate(&out) {
        out.truncate(1);
    }
    out
}

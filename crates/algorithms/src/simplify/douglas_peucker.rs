//! Recursive Douglas-Peucker point elimination
//!
//! Operates on an ordered slice of coordinates and a parallel `kept` flag
//! vector. The first and last point are always kept; for every sub-range the
//! interior point deviating most from the chord is kept when its deviation
//! strictly exceeds the tolerance, and the sub-ranges on either side of it
//! are processed recursively.
//!
//! All deviations are computed and compared in the strategy's comparable
//! unit; the caller's real-unit tolerance is converted once on entry.

use geo_types::Coord;
use simpligis_core::DistanceStrategy;

/// Run Douglas-Peucker over `points`, returning the kept points in their
/// original order.
///
/// `max_distance` is in real distance units. Slices shorter than 3 points
/// have no interior candidates and are returned as-is.
pub(crate) fn douglas_peucker<S: DistanceStrategy>(
    points: &[Coord<f64>],
    max_distance: f64,
    strategy: &S,
) -> Vec<Coord<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[points.len() - 1] = true;

    let comparable = strategy.comparable_tolerance(max_distance);
    consider(points, &mut kept, 0, points.len(), comparable, strategy);

    points
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect()
}

/// Recursive step over the half-open index range `[begin, end)`.
///
/// `max_dist` is already in comparable units.
fn consider<S: DistanceStrategy>(
    points: &[Coord<f64>],
    kept: &mut [bool],
    begin: usize,
    end: usize,
    max_dist: f64,
    strategy: &S,
) {
    // A candidate needs at least one interior point.
    if end - begin <= 2 {
        return;
    }

    let last = end - 1;

    // Farthest interior point from the chord. Only a strictly larger
    // deviation replaces the current best, so the first point reaching the
    // maximum wins.
    let mut md = -1.0;
    let mut candidate = begin;
    for i in begin + 1..last {
        let dist = strategy.deviation(points[i], points[begin], points[last]);
        if strategy.less(md, dist) {
            md = dist;
            candidate = i;
        }
    }

    if strategy.less(max_dist, md) {
        kept[candidate] = true;
        consider(points, kept, begin, candidate + 1, max_dist, strategy);
        consider(points, kept, candidate, end, max_dist, strategy);
    }
}

//! Distance strategies for simplification
//!
//! A `DistanceStrategy` answers the two geometric questions the
//! simplification algorithms ask: how far does a candidate point deviate
//! from a chord, and how far apart are two points. Strategies report
//! distances in a *comparable* unit: any monotone transform of true
//! distance (e.g. the square) that preserves ordering. The caller's
//! real-unit tolerance is brought into the same unit family via
//! `comparable_tolerance` before any comparison takes place.
//!
//! Two planar strategies are provided:
//! - [`SquaredEuclidean`]: squared distances, no square roots (default)
//! - [`Euclidean`]: true distances, identity tolerance transform

use geo_types::Coord;

/// Pluggable distance computation for simplification.
///
/// All three distance-producing methods must report values in the same
/// comparable unit, and `less` must be a strict total order on that unit.
/// Implementations are expected to be cheap to call in a tight loop.
pub trait DistanceStrategy {
    /// Deviation of `candidate` from the chord running from `chord_start`
    /// to `chord_end`, in comparable units.
    ///
    /// When the chord is degenerate (equal endpoints) this is the
    /// point-point distance to that endpoint.
    fn deviation(&self, candidate: Coord<f64>, chord_start: Coord<f64>, chord_end: Coord<f64>)
        -> f64;

    /// Point-to-point distance in comparable units.
    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64;

    /// Convert a non-negative real-unit tolerance into comparable units.
    ///
    /// Must be monotone: `t1 < t2` implies
    /// `comparable_tolerance(t1) < comparable_tolerance(t2)`.
    fn comparable_tolerance(&self, max_distance: f64) -> f64;

    /// Strict "less than" over comparable values.
    fn less(&self, lhs: f64, rhs: f64) -> bool {
        lhs < rhs
    }
}

/// Squared planar distance to the segment `a`-`b`, clamped to the endpoints.
fn point_segment_sq(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return point_point_sq(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let proj = Coord {
        x: a.x + t * dx,
        y: a.y + t * dy,
    };
    point_point_sq(p, proj)
}

fn point_point_sq(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Squared planar distances. The default strategy.
///
/// Avoids square roots in the inner loop; tolerances are squared to match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl DistanceStrategy for SquaredEuclidean {
    fn deviation(
        &self,
        candidate: Coord<f64>,
        chord_start: Coord<f64>,
        chord_end: Coord<f64>,
    ) -> f64 {
        point_segment_sq(candidate, chord_start, chord_end)
    }

    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
        point_point_sq(a, b)
    }

    fn comparable_tolerance(&self, max_distance: f64) -> f64 {
        max_distance * max_distance
    }
}

/// True planar distances.
///
/// Slower than [`SquaredEuclidean`] but reports real units; useful when a
/// caller wants to log or inspect deviations directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceStrategy for Euclidean {
    fn deviation(
        &self,
        candidate: Coord<f64>,
        chord_start: Coord<f64>,
        chord_end: Coord<f64>,
    ) -> f64 {
        point_segment_sq(candidate, chord_start, chord_end).sqrt()
    }

    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
        point_point_sq(a, b).sqrt()
    }

    fn comparable_tolerance(&self, max_distance: f64) -> f64 {
        max_distance
    }
}

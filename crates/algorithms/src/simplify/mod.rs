//! Geometry simplification
//!
//! Reduces the vertex count of linestrings, rings, polygons and
//! multi-geometries with the Douglas-Peucker algorithm, bounding the
//! geometric deviation of the result by a caller-supplied tolerance.
//!
//! Shape handling:
//! - linestrings: plain Douglas-Peucker, endpoints always kept
//! - rings: rotation-based restart search that preserves the winding
//!   direction (signed-area sign) or returns an empty ring
//! - polygons: exterior and holes simplified independently, vanished
//!   holes dropped
//! - multi-geometries: element-wise, vanished elements dropped
//!
//! The tolerance is in the units of the input coordinates; a negative
//! tolerance disables simplification and copies the input verbatim. The
//! point-to-chord deviation measure is pluggable via
//! [`DistanceStrategy`]; the default works on squared planar distances.
//!
//! Simplified rings may self-intersect when the tolerance is large; this
//! is not checked.

mod douglas_peucker;
mod multi;
mod polygon;
mod range;
mod ring;

use geo_types::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use simpligis_core::{Algorithm, DistanceStrategy, Error, Result, SquaredEuclidean};

/// Parameters for simplification
#[derive(Debug, Clone)]
pub struct SimplifyParams {
    /// Maximum allowed deviation, in input coordinate units.
    /// Negative disables simplification.
    pub tolerance: f64,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

/// Simplify a geometry with the default (squared planar) distance strategy.
///
/// Points and multi-points are copied unchanged. Fixed-vertex shapes
/// (`Line`, `Rect`, `Triangle`) and geometry collections are also copied
/// unchanged.
pub fn simplify(geom: &Geometry<f64>, tolerance: f64) -> Geometry<f64> {
    simplify_with(geom, tolerance, &SquaredEuclidean)
}

/// Simplify a geometry with a caller-supplied distance strategy.
pub fn simplify_with<S: DistanceStrategy>(
    geom: &Geometry<f64>,
    tolerance: f64,
    strategy: &S,
) -> Geometry<f64> {
    match geom {
        Geometry::Point(p) => Geometry::Point(*p),
        Geometry::LineString(ls) => {
            Geometry::LineString(simplify_line_with(ls, tolerance, strategy))
        }
        Geometry::Polygon(p) => Geometry::Polygon(simplify_polygon_with(p, tolerance, strategy)),
        Geometry::MultiPoint(mp) => Geometry::MultiPoint(mp.clone()),
        Geometry::MultiLineString(mls) => {
            let simplified = multi::simplify_multi(&mls.0, |ls| {
                simplify_line_with(ls, tolerance, strategy)
            });
            Geometry::MultiLineString(MultiLineString::new(simplified))
        }
        Geometry::MultiPolygon(mp) => {
            let simplified = multi::simplify_multi(&mp.0, |p| {
                simplify_polygon_with(p, tolerance, strategy)
            });
            Geometry::MultiPolygon(MultiPolygon::new(simplified))
        }
        other => other.clone(),
    }
}

/// Simplify an open linestring.
///
/// Keeps at least the two endpoints, unless the input is two equal points,
/// which collapse to one.
pub fn simplify_line(line: &LineString<f64>, tolerance: f64) -> LineString<f64> {
    simplify_line_with(line, tolerance, &SquaredEuclidean)
}

/// Simplify an open linestring with a caller-supplied strategy.
pub fn simplify_line_with<S: DistanceStrategy>(
    line: &LineString<f64>,
    tolerance: f64,
    strategy: &S,
) -> LineString<f64> {
    LineString::new(range::simplify_range(&line.0, tolerance, 2, strategy))
}

/// Simplify a closed ring, preserving its winding direction.
///
/// Returns an empty ring when the input cannot be simplified at this
/// tolerance without flipping or collapsing. The output starts at the
/// rotation anchor chosen by the restart search, not necessarily at the
/// input's first vertex.
pub fn simplify_ring(ring: &LineString<f64>, tolerance: f64) -> LineString<f64> {
    simplify_ring_with(ring, tolerance, &SquaredEuclidean)
}

/// Simplify a closed ring with a caller-supplied strategy.
pub fn simplify_ring_with<S: DistanceStrategy>(
    ring: &LineString<f64>,
    tolerance: f64,
    strategy: &S,
) -> LineString<f64> {
    ring::simplify_ring(ring, tolerance, strategy)
}

/// Simplify a polygon: the exterior ring and each hole independently.
///
/// Holes that vanish are dropped. The simplified exterior and holes are
/// not checked against each other.
pub fn simplify_polygon(polygon: &Polygon<f64>, tolerance: f64) -> Polygon<f64> {
    simplify_polygon_with(polygon, tolerance, &SquaredEuclidean)
}

/// Simplify a polygon with a caller-supplied strategy.
pub fn simplify_polygon_with<S: DistanceStrategy>(
    polygon: &Polygon<f64>,
    tolerance: f64,
    strategy: &S,
) -> Polygon<f64> {
    polygon::simplify_polygon(polygon, tolerance, strategy)
}

/// Simplify a linestring, appending the surviving points to `out`.
///
/// Append-style variant of [`simplify_line`]: `out` is not cleared, and no
/// degenerate post-pass is applied to it.
pub fn simplify_into(line: &LineString<f64>, tolerance: f64, out: &mut Vec<Coord<f64>>) {
    simplify_into_with(line, tolerance, &SquaredEuclidean, out)
}

/// Append-style simplification with a caller-supplied strategy.
pub fn simplify_into_with<S: DistanceStrategy>(
    line: &LineString<f64>,
    tolerance: f64,
    strategy: &S,
    out: &mut Vec<Coord<f64>>,
) {
    range::simplify_range_into(&line.0, tolerance, strategy, out)
}

/// Simplify algorithm
#[derive(Debug, Clone, Default)]
pub struct Simplify;

impl Algorithm for Simplify {
    type Input = Geometry<f64>;
    type Output = Geometry<f64>;
    type Params = SimplifyParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Simplify"
    }

    fn description(&self) -> &'static str {
        "Reduce vertex count with Douglas-Peucker while bounding geometric deviation"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        if !params.tolerance.is_finite() {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                value: params.tolerance.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        Ok(simplify(&input, params.tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{MultiPoint, Point};

    #[test]
    fn test_point_copied() {
        let geom = Geometry::Point(Point::new(1.0, 2.0));
        assert_eq!(simplify(&geom, 10.0), geom);
    }

    #[test]
    fn test_multi_point_copied() {
        let geom = Geometry::MultiPoint(MultiPoint::from(vec![(0.0, 0.0), (0.1, 0.1)]));
        assert_eq!(simplify(&geom, 10.0), geom);
    }

    #[test]
    fn test_line_dispatch() {
        let geom = Geometry::LineString(LineString::from(vec![
            (0.0, 0.0),
            (5.0, 0.1),
            (10.0, 0.0),
        ]));
        let out = simplify(&geom, 1.0);
        match out {
            Geometry::LineString(ls) => assert_eq!(ls.0.len(), 2),
            other => panic!("expected LineString, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_line_dispatch() {
        let geom = Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::from(vec![(0.0, 0.0), (5.0, 0.1), (10.0, 0.0)]),
            LineString::from(vec![(0.0, 5.0), (5.0, 9.0), (10.0, 5.0)]),
        ]));
        match simplify(&geom, 1.0) {
            Geometry::MultiLineString(mls) => {
                assert_eq!(mls.0.len(), 2);
                assert_eq!(mls.0[0].0.len(), 2);
                assert_eq!(mls.0[1].0.len(), 3);
            }
            other => panic!("expected MultiLineString, got {other:?}"),
        }
    }

    #[test]
    fn test_unhandled_variant_copied() {
        let geom = Geometry::Rect(geo_types::Rect::new((0.0, 0.0), (5.0, 5.0)));
        assert_eq!(simplify(&geom, 10.0), geom);
    }

    #[test]
    fn test_simplify_into_appends() {
        let line = LineString::from(vec![(0.0, 0.0), (5.0, 0.1), (10.0, 0.0)]);
        let mut out = vec![Coord { x: -1.0, y: -1.0 }];
        simplify_into(&line, 1.0, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Coord { x: -1.0, y: -1.0 });
        assert_eq!(out[1], Coord { x: 0.0, y: 0.0 });
        assert_eq!(out[2], Coord { x: 10.0, y: 0.0 });
    }

    #[test]
    fn test_algorithm_trait() {
        let geom = Geometry::LineString(LineString::from(vec![
            (0.0, 0.0),
            (5.0, 0.1),
            (10.0, 0.0),
        ]));
        let out = Simplify.execute(geom, SimplifyParams { tolerance: 1.0 }).unwrap();
        match out {
            Geometry::LineString(ls) => assert_eq!(ls.0.len(), 2),
            other => panic!("expected LineString, got {other:?}"),
        }
    }

    #[test]
    fn test_algorithm_rejects_nan_tolerance() {
        let geom = Geometry::Point(Point::new(0.0, 0.0));
        let err = Simplify
            .execute(geom, SimplifyParams { tolerance: f64::NAN })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "tolerance", .. }));
    }
}

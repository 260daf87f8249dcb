//! Polygon policy: exterior and interior rings simplified independently
//!
//! Interior rings that simplify to empty are dropped (a hole may
//! legitimately vanish at a coarse tolerance). No consistency between the
//! simplified exterior and the simplified holes is checked: with a large
//! tolerance a hole can end up intersecting or outside the new exterior.
//! This is a documented limitation.

use geo_types::{LineString, Polygon};
use simpligis_core::DistanceStrategy;

use super::ring::simplify_ring;

pub(crate) fn simplify_polygon<S: DistanceStrategy>(
    polygon: &Polygon<f64>,
    max_distance: f64,
    strategy: &S,
) -> Polygon<f64> {
    let exterior = simplify_ring(polygon.exterior(), max_distance, strategy);

    let mut interiors: Vec<LineString<f64>> = Vec::new();
    for ring in polygon.interiors() {
        let out = simplify_ring(ring, max_distance, strategy);
        if !out.0.is_empty() {
            interiors.push(out);
        }
    }

    Polygon::new(exterior, interiors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simpligis_core::measures::{area_sign, ring_signed_area};
    use simpligis_core::SquaredEuclidean;

    fn square(min: f64, max: f64) -> LineString<f64> {
        LineString::from(vec![(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    #[test]
    fn test_exterior_and_hole_simplified() {
        let poly = Polygon::new(square(0.0, 100.0), vec![square(40.0, 60.0)]);
        let out = simplify_polygon(&poly, 1.0, &SquaredEuclidean);
        assert_eq!(out.exterior().0.len(), 5);
        assert_eq!(out.interiors().len(), 1);
        assert_eq!(out.interiors()[0].0.len(), 5);
    }

    #[test]
    fn test_vanishing_hole_dropped() {
        // Hole perimeter 8 < 3 * 5: it cannot survive this tolerance.
        let poly = Polygon::new(square(0.0, 1000.0), vec![square(40.0, 42.0)]);
        let out = simplify_polygon(&poly, 5.0, &SquaredEuclidean);
        assert!(!out.exterior().0.is_empty());
        assert!(out.interiors().is_empty());
    }

    #[test]
    fn test_hole_order_preserved() {
        let poly = Polygon::new(
            square(0.0, 1000.0),
            vec![square(100.0, 200.0), square(300.0, 400.0), square(500.0, 600.0)],
        );
        let out = simplify_polygon(&poly, 1.0, &SquaredEuclidean);
        assert_eq!(out.interiors().len(), 3);
        assert!(out.interiors()[0].0.contains(&(100.0, 100.0).into()));
        assert!(out.interiors()[1].0.contains(&(300.0, 300.0).into()));
        assert!(out.interiors()[2].0.contains(&(500.0, 500.0).into()));
    }

    #[test]
    fn test_negative_tolerance_is_identity() {
        let poly = Polygon::new(square(0.0, 100.0), vec![square(40.0, 60.0)]);
        let out = simplify_polygon(&poly, -1.0, &SquaredEuclidean);
        assert_eq!(out, poly);
    }

    #[test]
    fn test_hole_orientation_preserved() {
        // geo convention: interiors wind opposite to the exterior.
        let mut hole = square(40.0, 60.0);
        hole.0.reverse();
        let hole_sign = area_sign(ring_signed_area(&hole));
        let poly = Polygon::new(square(0.0, 100.0), vec![hole]);
        let out = simplify_polygon(&poly, 1.0, &SquaredEuclidean);
        assert_eq!(area_sign(ring_signed_area(&out.interiors()[0])), hole_sign);
    }

    #[test]
    fn test_empty_polygon() {
        let poly: Polygon<f64> = Polygon::new(LineString::new(vec![]), vec![]);
        let out = simplify_polygon(&poly, 1.0, &SquaredEuclidean);
        assert!(out.exterior().0.is_empty());
        assert!(out.interiors().is_empty());
    }
}

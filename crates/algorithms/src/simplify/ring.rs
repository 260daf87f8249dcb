//! Ring policy: orientation-preserving simplification of closed rings
//!
//! Running the range policy directly on a ring can invert its winding or
//! collapse it entirely: the chord of a ring is rotation-dependent, and a
//! badly placed start vertex produces spuriously thin triangles. The policy
//! therefore rotates the ring to a robust anchor before simplifying, and
//! retries from other anchors when the result's orientation sign does not
//! match the input's.

use std::collections::HashSet;

use geo_types::{Coord, LineString};
use simpligis_core::measures::{area_sign, ring_perimeter, ring_signed_area};
use simpligis_core::DistanceStrategy;

use super::range::simplify_range;

/// Index of the vertex farthest from `cycle[index]`.
///
/// Single forward scan; the first vertex reaching a new maximum distance
/// wins. Anchoring on this vertex keeps the chord away from the middle of a
/// nearly straight run.
fn opposite<S: DistanceStrategy>(index: usize, cycle: &[Coord<f64>], strategy: &S) -> usize {
    let point = cycle[index];
    let mut max_distance = -1.0;
    let mut found = index;
    for (i, c) in cycle.iter().enumerate() {
        let dist = strategy.distance(*c, point);
        if dist > max_distance {
            max_distance = dist;
            found = i;
        }
    }
    found
}

/// Simplify a closed ring, preserving its orientation sign.
///
/// Up to four rotation anchors are tried; each trial rotates the ring to
/// start at the antipodal point of a scheduled index, re-closes it and runs
/// the range policy. A candidate is accepted as soon as its signed-area
/// sign matches the input's. An empty result means the ring cannot be
/// simplified at this tolerance without flipping or collapsing.
///
/// A negative tolerance returns the ring verbatim. The output may be
/// self-intersecting for large tolerances; this is not checked.
pub(crate) fn simplify_ring<S: DistanceStrategy>(
    ring: &LineString<f64>,
    max_distance: f64,
    strategy: &S,
) -> LineString<f64> {
    if ring.0.is_empty() {
        return LineString::new(vec![]);
    }
    if max_distance < 0.0 {
        return ring.clone();
    }

    // Work on the open vertex cycle; the duplicated closing vertex is
    // re-appended after rotation.
    let closed = ring.0.len() > 1 && ring.0.first() == ring.0.last();
    let cycle: &[Coord<f64>] = if closed {
        &ring.0[..ring.0.len() - 1]
    } else {
        &ring.0
    };
    let size = cycle.len();
    if size == 0 {
        return LineString::new(vec![]);
    }

    let input_sign = area_sign(ring_signed_area(ring));

    let mut visited_indexes: HashSet<usize> = HashSet::new();
    let mut index = 0;

    // Offset schedule: 0, +1/4, +1/8, +1/4 of the ring length. Together
    // with the antipodal replacement this examines up to 8 "sides" of the
    // ring; usually the first attempt already succeeds.
    for iteration in 0..4u32 {
        match iteration {
            1 => index = (index + size / 4) % size,
            2 => index = (index + size / 8) % size,
            3 => index = (index + size / 4) % size,
            _ => {}
        }
        index = opposite(index, cycle, strategy);

        if visited_indexes.contains(&index) {
            // Same anchor as an earlier attempt; no point repeating it.
            continue;
        }

        let mut rotated = Vec::with_capacity(size + 1);
        rotated.extend_from_slice(&cycle[index..]);
        rotated.extend_from_slice(&cycle[..index]);
        rotated.push(cycle[index]);

        let candidate = LineString::new(simplify_range(&rotated, max_distance, 0, strategy));

        // What was positive must stay positive (or go to 0), and the same
        // for negative.
        let output_sign = area_sign(ring_signed_area(&candidate));
        if output_sign == input_sign {
            return candidate;
        }

        if iteration == 0 && ring_perimeter(ring) < 3.0 * max_distance {
            // A minimal triangle has a perimeter a bit over 3 tolerances;
            // a ring smaller than that cannot survive at this scale.
            return LineString::new(vec![]);
        }

        visited_indexes.insert(index);
    }

    LineString::new(vec![])
}

//! Multi-geometry policy: element-wise simplification
//!
//! Applies a single-geometry policy to every element of a collection,
//! dropping elements that simplify to empty. Relative order of the
//! survivors is preserved. Elements are independent of each other, so a
//! caller needing throughput can partition a collection and run the single
//! policies in parallel; the engine itself stays sequential.

use geo::HasDimensions;

pub(crate) fn simplify_multi<T, F>(elements: &[T], policy: F) -> Vec<T>
where
    T: HasDimensions,
    F: Fn(&T) -> T,
{
    let mut out = Vec::new();
    for element in elements {
        let single = policy(element);
        if !single.is_empty() {
            out.push(single);
        }
    }
    out
}

//! # SimpliGis Algorithms
//!
//! Geometry generalization algorithms for SimpliGis.
//!
//! ## Available Algorithm Categories
//!
//! - **simplify**: vertex-count reduction with Douglas-Peucker, with
//!   orientation-preserving handling of rings, polygons and
//!   multi-geometries

pub mod simplify;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::simplify::{
        simplify, simplify_into, simplify_into_with, simplify_line, simplify_line_with,
        simplify_polygon, simplify_polygon_with, simplify_ring, simplify_ring_with,
        simplify_with, Simplify, SimplifyParams,
    };
    pub use simpligis_core::prelude::*;
}

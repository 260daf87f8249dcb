//! # SimpliGis Core
//!
//! Core types, traits and strategies for the SimpliGis geometry
//! generalization library.
//!
//! This crate provides:
//! - `DistanceStrategy`: pluggable point-segment / point-point distance
//!   computation used by the simplification algorithms
//! - Ring measures: signed area, orientation sign, perimeter
//! - Algorithm traits for consistent API
//! - Error types

pub mod error;
pub mod measures;
pub mod strategy;

pub use error::{Error, Result};
pub use strategy::{DistanceStrategy, Euclidean, SquaredEuclidean};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::measures::{area_sign, ring_perimeter, ring_signed_area};
    pub use crate::strategy::{DistanceStrategy, Euclidean, SquaredEuclidean};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in SimpliGis.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

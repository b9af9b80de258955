// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Monte Carlo estimates of how often a greedy nearest-neighbor path through
//! a small point set crosses itself.
//!
//! ```rust
//! # use nncross::simulation::{simulate, Scenario};
//! use rand::SeedableRng;
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
//! let estimate = simulate(&Scenario::octagon(), 1_000, &mut rng).unwrap();
//! assert_eq!(estimate.intersections, 0);
//! ```
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod config;
pub mod data;
mod intersection;
mod orientation;
pub mod simulation;

pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A simulation was asked to run zero trials.
  InvalidTrialCount,
  /// No points are left to build a path from.
  InvalidSubsetSize,
  StartOutOfBounds,
  /// A point-set parameter is not a finite, positive number.
  InvalidParameter,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidTrialCount => write!(f, "Trial count must be at least one"),
      Error::InvalidSubsetSize => write!(f, "No points remain to start a path from"),
      Error::StartOutOfBounds => write!(f, "Start index is outside the point subset"),
      Error::InvalidParameter => write!(
        f,
        "Point set parameters must be finite and greater than zero"
      ),
    }
  }
}

impl std::error::Error for Error {}

/// Total order on floating point values, NaN included.
pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Coordinate type for points, paths and segments.
///
/// Distances need `sqrt`, so only floating point types qualify. Exact
/// orientation checks are done in `f64`.
pub trait PathScalar: Debug + Float + TotalOrd + Into<f64> {}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PathScalar for $ty {}
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

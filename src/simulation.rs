//! Monte Carlo trials over a fixed point set.
//!
//! A trial removes a few random points, starts a nearest-neighbor walk at a
//! random survivor and records whether the walk crosses itself. Repeating
//! this gives an estimate of the crossing probability.
use log::{debug, info};
use rand::seq::index;
use rand::Rng;
use std::fmt;

use crate::algorithms::{nearest_neighbor_path, self_intersections};
use crate::data::{Crossing, Path, PointSet};
use crate::data::{OCTAGON_RADIUS, TWO_COLUMN_HEIGHT, TWO_COLUMN_WIDTH};
use crate::Error;

/// Number of points removed before each walk.
pub const REMOVED_POINTS: usize = 2;

///////////////////////////////////////////////////////////////////////////////
// Scenario

/// Which point set to sample from, with its shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
  Octagon { radius: f64 },
  TwoColumn { width: f64, height: f64 },
}

impl Scenario {
  /// Octagon of radius 100.
  pub fn octagon() -> Scenario {
    Scenario::Octagon {
      radius: OCTAGON_RADIUS,
    }
  }

  /// Rows one unit apart horizontally and two units apart vertically.
  pub fn two_column() -> Scenario {
    Scenario::TwoColumn {
      width: TWO_COLUMN_WIDTH,
      height: TWO_COLUMN_HEIGHT,
    }
  }

  pub fn point_set(&self) -> Result<PointSet, Error> {
    match *self {
      Scenario::Octagon { radius } => PointSet::octagon(radius),
      Scenario::TwoColumn { width, height } => PointSet::two_column(width, height),
    }
  }
}

impl fmt::Display for Scenario {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Scenario::Octagon { radius } => write!(f, "octagon (radius {})", radius),
      Scenario::TwoColumn { width, height } => {
        write!(f, "two-column (width {}, height {})", width, height)
      }
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trial

/// Outcome of a single trial. All indices refer to the full point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
  /// Removed indices, in the order they were drawn.
  pub removed: Vec<usize>,
  /// Surviving indices in ascending order.
  pub subset: Vec<usize>,
  pub path: Path,
  /// `None` if the path is free of crossings, otherwise `Proper` if any
  /// crossing is proper and `Touching` if all of them are.
  pub crossing: Option<Crossing>,
}

impl Trial {
  pub fn intersects(&self) -> bool {
    self.crossing.is_some()
  }
}

/// Run one trial: drop `removed` random points, pick a random start among
/// the rest, walk to nearest neighbours and test the walk for crossings.
///
/// # Errors
///
/// [`Error::InvalidSubsetSize`] if removing `removed` points leaves nothing
/// to start from.
pub fn run_trial<R>(points: &PointSet, removed: usize, rng: &mut R) -> Result<Trial, Error>
where
  R: Rng + ?Sized,
{
  if removed >= points.len() {
    return Err(Error::InvalidSubsetSize);
  }
  let dropped = index::sample(rng, points.len(), removed).into_vec();
  let subset: Vec<usize> = (0..points.len()).filter(|idx| !dropped.contains(idx)).collect();
  let start = rng.gen_range(0..subset.len());

  let path = nearest_neighbor_path(&points.select(&subset), start)?.remap(&subset);

  let crossing = {
    let mut crossings = self_intersections(points, &path);
    crossings.next().map(|first| {
      if first.crossing.is_proper() || crossings.any(|isect| isect.crossing.is_proper()) {
        Crossing::Proper
      } else {
        Crossing::Touching
      }
    })
  };

  Ok(Trial {
    removed: dropped,
    subset,
    path,
    crossing,
  })
}

///////////////////////////////////////////////////////////////////////////////
// Estimate

/// Aggregated result of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Estimate {
  pub trials: usize,
  /// Trials whose path crossed itself.
  pub intersections: usize,
  /// Trials whose crossings were all touching contacts. Included in
  /// `intersections`.
  pub touching: usize,
}

impl Estimate {
  /// Fraction of trials with a self-crossing path. Zero for an empty
  /// estimate.
  pub fn probability(&self) -> f64 {
    if self.trials == 0 {
      0.0
    } else {
      self.intersections as f64 / self.trials as f64
    }
  }

  fn record(&mut self, trial: &Trial) {
    self.trials += 1;
    match trial.crossing {
      Some(Crossing::Proper) => self.intersections += 1,
      Some(Crossing::Touching) => {
        self.intersections += 1;
        self.touching += 1;
      }
      None => {}
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Simulation

/// Estimate the self-crossing probability for `scenario` over `n_trials`
/// trials, removing two points per trial.
///
/// # Errors
///
/// * [`Error::InvalidTrialCount`] if `n_trials` is zero.
/// * [`Error::InvalidParameter`] if the scenario's shape is degenerate.
pub fn simulate<R>(scenario: &Scenario, n_trials: usize, rng: &mut R) -> Result<Estimate, Error>
where
  R: Rng + ?Sized,
{
  let points = scenario.point_set()?;
  info!("Simulating {} over {} trials", scenario, n_trials);
  simulate_points(&points, REMOVED_POINTS, n_trials, rng)
}

/// Like [`simulate`] but over an explicit point set and removal count.
///
/// # Errors
///
/// * [`Error::InvalidTrialCount`] if `n_trials` is zero.
/// * [`Error::InvalidSubsetSize`] if `removed` leaves no points.
pub fn simulate_points<R>(
  points: &PointSet,
  removed: usize,
  n_trials: usize,
  rng: &mut R,
) -> Result<Estimate, Error>
where
  R: Rng + ?Sized,
{
  if n_trials == 0 {
    return Err(Error::InvalidTrialCount);
  }
  if removed >= points.len() {
    return Err(Error::InvalidSubsetSize);
  }
  debug!("{} points, removing {} per trial", points.len(), removed);

  let mut estimate = Estimate::default();
  for _ in 0..n_trials {
    let trial = run_trial(points, removed, rng)?;
    if let Some(crossing) = trial.crossing {
      debug!(
        "{:?} crossing after removing {:?}: {}",
        crossing,
        trial.removed.iter().map(|&idx| PointSet::label(idx)).collect::<String>(),
        PointSet::describe(&trial.path)
      );
    }
    estimate.record(&trial);
  }

  info!(
    "{} of {} trials crossed ({} touching only)",
    estimate.intersections, estimate.trials, estimate.touching
  );
  Ok(estimate)
}

use std::f64::consts::TAU;
use std::ops::Deref;

use super::{Path, Point};
use crate::Error;

/// Radius used by the octagon scenario.
pub const OCTAGON_RADIUS: f64 = 100.0;
/// Horizontal spacing between neighbours in a row (A-B, E-F, ...).
pub const TWO_COLUMN_WIDTH: f64 = 1.0;
/// Vertical distance between the two rows (A-E, D-H).
pub const TWO_COLUMN_HEIGHT: f64 = 2.0;

const ROW_LEN: usize = 4;
const OCTAGON_VERTICES: usize = 8;

/// An immutable, ordered set of points. A point's index is its identity for
/// the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
  points: Vec<Point>,
}

impl PointSet {
  pub fn new(points: Vec<Point>) -> PointSet {
    PointSet { points }
  }

  /// Vertices of a regular octagon centered on the origin, starting at
  /// angle 0 and going counter-clockwise in 45° steps.
  ///
  /// ```rust
  /// # use nncross::data::PointSet;
  /// let octagon = PointSet::octagon(100.0).unwrap();
  /// assert_eq!(octagon.len(), 8);
  /// assert_eq!(octagon[0].array, [100.0, 0.0]);
  /// ```
  pub fn octagon(radius: f64) -> Result<PointSet, Error> {
    check_parameter(radius)?;
    let points = (0..OCTAGON_VERTICES)
      .map(|k| {
        let theta = TAU * k as f64 / OCTAGON_VERTICES as f64;
        Point::new([radius * theta.cos(), radius * theta.sin()])
      })
      .collect();
    Ok(PointSet { points })
  }

  /// Two parallel rows of four points. Indices 0-3 (A-D) are the upper row
  /// at `y = height / 2`, indices 4-7 (E-H) the lower row at
  /// `y = -height / 2`. Both rows start at `x = 0`.
  pub fn two_column(width: f64, height: f64) -> Result<PointSet, Error> {
    check_parameter(width)?;
    check_parameter(height)?;
    let row = |y: f64| (0..ROW_LEN).map(move |i| Point::new([i as f64 * width, y]));
    let points = row(height / 2.0).chain(row(-height / 2.0)).collect();
    Ok(PointSet { points })
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Copy the points at `indices`, in that order.
  ///
  /// # Panics
  ///
  /// Panics if any index is out of bounds.
  pub fn select(&self, indices: &[usize]) -> Vec<Point> {
    indices.iter().map(|&idx| self.points[idx]).collect()
  }

  /// Letter naming the point at `index`: `A` for 0, `B` for 1 and so on.
  /// Indices past `Z` fall back to `?`.
  pub fn label(index: usize) -> char {
    if index < 26 {
      char::from(b'A' + index as u8)
    } else {
      '?'
    }
  }

  /// Render a path as labels, e.g. `D-C-G-F-E-H`.
  pub fn describe(path: &Path) -> String {
    path
      .iter()
      .map(|&idx| PointSet::label(idx).to_string())
      .collect::<Vec<_>>()
      .join("-")
  }
}

impl Deref for PointSet {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.points
  }
}

fn check_parameter(value: f64) -> Result<(), Error> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidParameter)
  }
}

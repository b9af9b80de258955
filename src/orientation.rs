use std::cmp::Ordering;

use num_traits::NumOps;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The two cross-product terms are compared directly in `T` with no
  /// error bounds, so nearly colinear triples may be misclassified and any
  /// comparison involving NaN yields [`Orientation::CoLinear`]. Use
  /// [`Orientation::exact`] when the sign must be trusted.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use nncross::data::Point;
  /// # use nncross::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Copy + NumOps + PartialOrd,
  {
    let lhs = (p3[1] - p1[1]) * (p2[0] - p1[0]);
    let rhs = (p2[1] - p1[1]) * (p3[0] - p1[0]);
    match lhs.partial_cmp(&rhs) {
      Some(Ordering::Greater) => CounterClockWise,
      Some(Ordering::Less) => ClockWise,
      Some(Ordering::Equal) | None => CoLinear,
    }
  }

  /// Like [`Orientation::new`] but computed with adaptive precision
  /// arithmetic, so the result is exact for any finite input.
  pub fn exact(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    let orient = geometry_predicates::predicates::orient2d(*p1, *p2, *p3);
    if orient > 0.0 {
      CounterClockWise
    } else if orient < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }
}

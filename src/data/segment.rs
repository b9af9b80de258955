use super::Point;
use crate::{Intersects, Orientation, PathScalar};

///////////////////////////////////////////////////////////////////////////////
// Crossing

/// How two segments meet once the crossing test has accepted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Crossing {
  /// The segments cross at a point interior to both.
  Proper,
  /// An endpoint of one segment lies exactly on the line through the other
  /// (a T-junction, a shared endpoint or a colinear overlap).
  Touching,
}

impl Crossing {
  pub fn is_proper(self) -> bool {
    self == Crossing::Proper
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

/// Borrowed segment from `src` to `dst`.
#[derive(Debug, PartialEq)]
pub struct LineSegmentView<'a, T = f64> {
  pub src: &'a Point<T>,
  pub dst: &'a Point<T>,
}

impl<T> Copy for LineSegmentView<'_, T> {}
impl<T> Clone for LineSegmentView<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> LineSegmentView<'a, T> {
  pub fn new(src: &'a Point<T>, dst: &'a Point<T>) -> LineSegmentView<'a, T> {
    LineSegmentView { src, dst }
  }
}

impl<'a, T> From<(&'a Point<T>, &'a Point<T>)> for LineSegmentView<'a, T> {
  fn from((src, dst): (&'a Point<T>, &'a Point<T>)) -> LineSegmentView<'a, T> {
    LineSegmentView { src, dst }
  }
}

// Crossing test with strict turns on both sides:
//   turn(p1, p3, p4) != turn(p2, p3, p4) && turn(p1, p2, p3) != turn(p1, p2, p4)
// where turn(a, b, c) is "c is strictly counter-clockwise of a->b". A zero
// cross product counts as not counter-clockwise, so touching configurations
// are accepted or rejected depending on which side the zero falls.
impl<'a, T> Intersects for LineSegmentView<'a, T>
where
  T: PathScalar,
{
  type Result = Crossing;
  fn intersect(self, other: LineSegmentView<'a, T>) -> Option<Crossing> {
    let (p1, p2) = (self.src, self.dst);
    let (p3, p4) = (other.src, other.dst);
    let ccw = |a: &Point<T>, b: &Point<T>, c: &Point<T>| a.orientation(b, c).is_ccw();
    if ccw(p1, p3, p4) == ccw(p2, p3, p4) || ccw(p1, p2, p3) == ccw(p1, p2, p4) {
      return None;
    }
    let exact = |a: &Point<T>, b: &Point<T>, c: &Point<T>| {
      Orientation::exact(&widen(a), &widen(b), &widen(c))
    };
    let touching = exact(p3, p4, p1).is_colinear()
      || exact(p3, p4, p2).is_colinear()
      || exact(p1, p2, p3).is_colinear()
      || exact(p1, p2, p4).is_colinear();
    if touching {
      Some(Crossing::Touching)
    } else {
      Some(Crossing::Proper)
    }
  }
}

fn widen<T: PathScalar>(pt: &Point<T>) -> [f64; 2] {
  [pt.array[0].into(), pt.array[1].into()]
}

impl<'a, T> Intersects for &'a (Point<T>, Point<T>)
where
  T: PathScalar,
{
  type Result = Crossing;
  fn intersect(self, other: &'a (Point<T>, Point<T>)) -> Option<Crossing> {
    LineSegmentView::new(&self.0, &self.1).intersect(LineSegmentView::new(&other.0, &other.1))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::any_point;

  use test_strategy::proptest;

  //
  // P7  P8
  //
  // P4  P2  P5
  //
  // P1  P3  P6
  //
  static P1: Point = Point::new([0.0, 0.0]);
  static P2: Point = Point::new([1.0, 1.0]);
  static P3: Point = Point::new([1.0, 0.0]);
  static P4: Point = Point::new([0.0, 1.0]);
  static P5: Point = Point::new([2.0, 1.0]);
  static P6: Point = Point::new([2.0, 0.0]);
  static P7: Point = Point::new([0.0, 2.0]);
  static P8: Point = Point::new([1.0, 2.0]);

  fn seg(a: &'static Point, b: &'static Point) -> LineSegmentView<'static> {
    LineSegmentView::new(a, b)
  }

  #[test]
  fn diagonals_cross() {
    assert_eq!(seg(&P1, &P2).intersect(seg(&P3, &P4)), Some(Crossing::Proper));
  }

  #[test]
  fn parallel_sides_do_not_cross() {
    assert_eq!(seg(&P1, &P3).intersect(seg(&P4, &P2)), None);
  }

  #[test]
  fn disjoint_segments() {
    assert_eq!(seg(&P1, &P4).intersect(seg(&P3, &P6)), None);
    assert_eq!(seg(&P1, &P2).intersect(seg(&P6, &P5)), None);
  }

  #[test]
  fn shared_endpoint_depends_on_turn() {
    // Right turn at P2.
    assert_eq!(seg(&P1, &P2).intersect(seg(&P2, &P5)), None);
    // Left turn at P2 passes the strict test.
    assert_eq!(
      seg(&P1, &P2).intersect(seg(&P2, &P4)),
      Some(Crossing::Touching)
    );
  }

  #[test]
  fn plus_sign_is_proper() {
    assert_eq!(seg(&P3, &P8).intersect(seg(&P4, &P5)), Some(Crossing::Proper));
  }

  #[test]
  fn t_junction_depends_on_side() {
    // Stem hanging down from above onto P4 -> P5.
    assert_eq!(
      seg(&P8, &P2).intersect(seg(&P4, &P5)),
      Some(Crossing::Touching)
    );
    assert_eq!(
      seg(&P2, &P8).intersect(seg(&P4, &P5)),
      Some(Crossing::Touching)
    );
    // Stem rising from below onto P4 -> P5.
    assert_eq!(seg(&P3, &P2).intersect(seg(&P4, &P5)), None);
  }

  #[test]
  fn colinear_overlap_is_not_a_crossing() {
    assert_eq!(seg(&P1, &P6).intersect(seg(&P3, &P6)), None);
    assert_eq!(seg(&P4, &P5).intersect(seg(&P7, &P8)), None);
  }

  #[test]
  fn tuple_segments() {
    let a = (P1, P2);
    let b = (P3, P4);
    assert_eq!((&a).intersect(&b), Some(Crossing::Proper));
  }

  #[proptest]
  fn crossing_is_symmetric(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
    #[strategy(any_point())] d: Point,
  ) {
    let ab = LineSegmentView::new(&a, &b);
    let cd = LineSegmentView::new(&c, &d);
    assert_eq!(ab.intersect(cd).is_some(), cd.intersect(ab).is_some());
  }

  #[proptest]
  fn reversing_a_segment_keeps_the_answer(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
    #[strategy(any_point())] d: Point,
  ) {
    let ab = LineSegmentView::new(&a, &b);
    let ba = LineSegmentView::new(&b, &a);
    let cd = LineSegmentView::new(&c, &d);
    assert_eq!(ab.intersect(cd), ba.intersect(cd));
  }
}

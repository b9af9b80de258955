use crate::data::{Crossing, Edge, Path, Point};
use crate::{Intersects, PathScalar};

/// Two edges of a path that cross, with `first` earlier in the path than
/// `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfIntersection {
  pub first: Edge,
  pub second: Edge,
  pub crossing: Crossing,
}

/// Find all crossings between non-adjacent edges of a path.
///
/// The path is an open polyline over `points`. Edge `i` is compared with
/// edges `i + 2` onwards; consecutive edges share a vertex and are never
/// compared. The first edge is compared with the last.
///
/// Skipping consecutive edges matters: under the strict crossing test two
/// consecutive edges that turn left at their shared vertex count as crossing
/// each other, so comparing every pair flags half of the octagon walks.
///
/// # Panics
///
/// Panics if the path refers to an index outside `points`.
///
/// # Time complexity
/// $O(n^2)$
pub fn self_intersections<'a, T>(
  points: &'a [Point<T>],
  path: &'a Path,
) -> impl Iterator<Item = SelfIntersection> + 'a
where
  T: PathScalar,
{
  let edges: Vec<Edge> = path.edges().collect();
  let n = edges.len();
  (0..n)
    .flat_map(move |a| (a + 2..n).map(move |b| (a, b)))
    .filter_map(move |(a, b)| {
      let first = edges[a];
      let second = edges[b];
      let crossing = first.segment(points).intersect(second.segment(points))?;
      Some(SelfIntersection {
        first,
        second,
        crossing,
      })
    })
}

/// True if any two non-adjacent edges of the path cross. Stops at the first
/// crossing found.
///
/// ```rust
/// # use nncross::algorithms::has_self_intersections;
/// # use nncross::data::{Path, Point};
/// let square = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// assert!(has_self_intersections(&square, &Path::new(vec![0, 1, 2, 3])));
/// assert!(!has_self_intersections(&square, &Path::new(vec![0, 2, 1, 3])));
/// ```
pub fn has_self_intersections<T>(points: &[Point<T>], path: &Path) -> bool
where
  T: PathScalar,
{
  self_intersections(points, path).next().is_some()
}

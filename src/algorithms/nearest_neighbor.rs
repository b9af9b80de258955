use crate::data::{Path, Point};
use crate::{Error, PathScalar, TotalOrd};

/// Visit every point once, always moving to the closest unvisited point.
///
/// Distances are Euclidean. When several candidates are equally close, the
/// one with the lowest index wins. A choice is never revisited, so the
/// resulting path may cross itself.
///
/// # Errors
///
/// * [`Error::InvalidSubsetSize`] if `points` is empty.
/// * [`Error::StartOutOfBounds`] if `start` is not an index into `points`.
///
/// # Time complexity
/// $O(n^2)$
///
/// # Examples
///
/// ```rust
/// # use nncross::algorithms::nearest_neighbor_path;
/// # use nncross::data::Point;
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([5.0, 0.0]),
///   Point::new([1.0, 0.0]),
/// ];
/// let path = nearest_neighbor_path(&pts, 0).unwrap();
/// assert_eq!(*path, [0, 2, 1]);
/// ```
pub fn nearest_neighbor_path<T>(points: &[Point<T>], start: usize) -> Result<Path, Error>
where
  T: PathScalar,
{
  if points.is_empty() {
    return Err(Error::InvalidSubsetSize);
  }
  if start >= points.len() {
    return Err(Error::StartOutOfBounds);
  }
  let mut remaining: Vec<usize> = (0..points.len()).filter(|&idx| idx != start).collect();
  let mut order = Vec::with_capacity(points.len());
  order.push(start);
  let mut current = start;
  while let Some(position) = nearest(points, &points[current], &remaining) {
    current = remaining.remove(position);
    order.push(current);
  }
  Ok(Path::new(order))
}

// Position (in `candidates`) of the candidate closest to `from`. `min_by`
// keeps the first of several equal minima, so ties go to the earliest
// candidate.
fn nearest<T: PathScalar>(points: &[Point<T>], from: &Point<T>, candidates: &[usize]) -> Option<usize> {
  candidates
    .iter()
    .map(|&idx| from.euclidean_distance(&points[idx]))
    .enumerate()
    .min_by(|(_, a), (_, b)| TotalOrd::total_cmp(a, b))
    .map(|(position, _)| position)
}

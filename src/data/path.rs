use std::ops::Deref;

use super::{LineSegmentView, Point};

/// Visiting order over a point collection. The first index is the start and
/// no index repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<usize>);

impl Path {
  pub fn new(order: Vec<usize>) -> Path {
    Path(order)
  }

  pub fn start(&self) -> Option<usize> {
    self.0.first().copied()
  }

  /// Consecutive index pairs. A path of `n` indices has `n - 1` edges and
  /// no edge closes the loop back to the start.
  pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
    self.0.windows(2).map(|pair| Edge {
      src: pair[0],
      dst: pair[1],
    })
  }

  /// Translate local indices through `subset`: local index `i` becomes
  /// `subset[i]`.
  ///
  /// # Panics
  ///
  /// Panics if a local index is out of bounds for `subset`.
  #[must_use]
  pub fn remap(&self, subset: &[usize]) -> Path {
    Path(self.0.iter().map(|&idx| subset[idx]).collect())
  }

  pub fn into_vec(self) -> Vec<usize> {
    self.0
  }
}

impl Deref for Path {
  type Target = [usize];
  fn deref(&self) -> &[usize] {
    &self.0
  }
}

impl From<Vec<usize>> for Path {
  fn from(order: Vec<usize>) -> Path {
    Path(order)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Edge

/// One segment of a path, from `src` to `dst` (indices into a point slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
  pub src: usize,
  pub dst: usize,
}

impl Edge {
  /// # Panics
  ///
  /// Panics if either endpoint is out of bounds for `points`.
  pub fn segment<'a, T>(&self, points: &'a [Point<T>]) -> LineSegmentView<'a, T> {
    LineSegmentView::new(&points[self.src], &points[self.dst])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn open_polyline_edges() {
    let path = Path::new(vec![2, 0, 3, 1]);
    let edges: Vec<Edge> = path.edges().collect();
    assert_eq!(
      edges,
      vec![
        Edge { src: 2, dst: 0 },
        Edge { src: 0, dst: 3 },
        Edge { src: 3, dst: 1 },
      ]
    );
  }

  #[test]
  fn short_paths_have_few_edges() {
    assert_eq!(Path::new(vec![]).edges().count(), 0);
    assert_eq!(Path::new(vec![5]).edges().count(), 0);
    assert_eq!(Path::new(vec![5, 1]).edges().count(), 1);
  }

  #[test]
  fn remap_to_original_indices() {
    let subset = [1, 2, 4, 5, 6, 7];
    let path = Path::new(vec![3, 2, 0, 1, 4, 5]);
    assert_eq!(*path.remap(&subset), [5, 4, 1, 2, 6, 7]);
    assert_eq!(path.remap(&subset).start(), Some(5));
  }
}

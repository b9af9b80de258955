/// Intersection test between two geometric values.
///
/// Returns `None` when the values do not intersect, otherwise a description
/// of how they meet.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

use num_traits::{Float, NumOps};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use crate::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn euclidean_distance(&self, rhs: &Point<T>) -> T
  where
    T: Float,
  {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    (dx * dx + dy * dy).sqrt()
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Copy + NumOps + PartialOrd,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

// Strategies for:
//  * points
//  * point clouds with a start index
//  * regular polygons
//  * visiting orders
use crate::data::{Path, Point};

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;

const COORD_RANGE: Range<f64> = -1000.0..1000.0;

/// Finite point with both coordinates in `[-1000, 1000)`.
pub fn any_point() -> impl Strategy<Value = Point> {
  (COORD_RANGE, COORD_RANGE).prop_map(Point::from)
}

/// Random points together with a valid start index. `len` must not include 0.
pub fn point_cloud_with_start(len: Range<usize>) -> impl Strategy<Value = (Vec<Point>, usize)> {
  vec(any_point(), len).prop_flat_map(|pts| {
    let n = pts.len();
    (Just(pts), 0..n)
  })
}

/// Vertices of a regular polygon in counter-clockwise order, with a random
/// vertex count, radius, rotation and center.
pub fn regular_polygon(vertices: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  (vertices, 1.0..500.0, 0.0..TAU, any_point()).prop_map(|(n, radius, rotation, center)| {
    (0..n)
      .map(|k| {
        let theta = rotation + TAU * k as f64 / n as f64;
        Point::new([
          center.x_coord() + radius * theta.cos(),
          center.y_coord() + radius * theta.sin(),
        ])
      })
      .collect()
  })
}

/// Random visiting order over `0..n`.
pub fn any_path(n: usize) -> impl Strategy<Value = Path> {
  Just((0..n).collect::<Vec<usize>>())
    .prop_shuffle()
    .prop_map(Path::new)
}

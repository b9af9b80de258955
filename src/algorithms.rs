pub mod intersection;
pub mod nearest_neighbor;

#[doc(inline)]
pub use intersection::naive::{has_self_intersections, self_intersections};

#[doc(inline)]
pub use nearest_neighbor::nearest_neighbor_path;

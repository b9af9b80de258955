mod path;
pub(crate) mod point;
mod point_set;
mod segment;

pub use path::*;
pub use point::Point;
pub use point_set::*;
pub use segment::*;

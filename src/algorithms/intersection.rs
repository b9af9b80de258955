pub mod naive;

pub use naive::SelfIntersection;

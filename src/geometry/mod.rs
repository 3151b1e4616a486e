// Geometry module - plain point/path containers and the predicates built on them

pub mod bound_rect;
pub mod point;
pub mod polygon;

pub use bound_rect::IntRect;
pub use point::{DoublePoint, IntPoint, Point};
pub use polygon::{Path, Paths};

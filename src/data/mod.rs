//! Core data types: points, vectors, cubic segments and fitted curves.

pub mod curve;
#[macro_use]
pub mod macros;
pub mod point;
pub mod segment;

pub use curve::BezierCurve;
pub use point::{Point, Vec2};
pub use segment::BezierSegment;

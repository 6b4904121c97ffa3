// Module definitions
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use config::FitConfig;
pub use data::curve::BezierCurve;
pub use data::point::{Point, Vec2};
pub use data::segment::BezierSegment;
pub use error::{BezierError, BezierResult};
pub use modules::fit::recursive_fit::{fit_curves, fit_curves_with_config};

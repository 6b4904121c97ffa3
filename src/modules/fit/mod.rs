//! Fitting cubic bezier curves to sequences of points
//!
//! - [`t_heuristic`]: chord-length parameterization of the input points
//! - [`least_square_fit`]: a single segment with fixed end tangents
//! - [`max_error`]: arc-length aware deviation between points and a segment
//! - [`reparameterize`]: Newton-Raphson refinement of the point parameters
//! - [`recursive_fit`]: the split-and-retry driver, entry point of the crate

pub mod least_square_fit;
pub mod max_error;
pub mod recursive_fit;
pub mod reparameterize;
pub mod t_heuristic;

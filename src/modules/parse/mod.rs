//! Parsing module for point sequences and fitted curves
//!
//! Now supported format:
//! - JSON:
//!     points in the form of `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]` or `[[0.0, 0.0], [1.0, 1.0]]`,
//!     curves as serialized by [`json::curve_to_json`].
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;

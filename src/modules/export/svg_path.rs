//! SVG export utilities for Bezier curves
//!
//! This module converts fitted curves into SVG path data, ready to be placed in
//! the `d` attribute of a `<path>` element.
//!
//! # Examples
//!
//! ## Exporting a simple Bezier curve to SVG path data
//!
//! ```rust
//! use fit_curves::{cubic, curve_from, modules::export::svg_path::ToSvgPath};
//!
//! // Create a simple cubic Bezier curve
//! let cubic_bezier = curve_from!(cubic!([
//!     (50.0, 200.0),    // Start point
//!     (100.0, 50.0),    // Control point 1
//!     (200.0, 50.0),    // Control point 2
//!     (250.0, 200.0)    // End point
//! ]));
//!
//! // Convert the curve to SVG path data
//! let path_data = cubic_bezier.to_svg_path();
//!
//! assert_eq!(path_data, "M50,200 C100,50,200,50,250,200");
//! ```
//!
//! ## Exporting a fitted stroke
//!
//! ```rust
//! use fit_curves::{fit_curves, points, modules::export::svg_path::ToSvgPath};
//!
//! let stroke = points![(0, 0), (10, 10), (10, 0), (20, 0)];
//! let path_data = fit_curves(&stroke, 1.0).unwrap().to_svg_path();
//!
//! // One move-to followed by a curve-to per fitted segment
//! assert!(path_data.starts_with("M0,0 C"));
//! assert_eq!(path_data.matches('C').count(), 3);
//! ```

use crate::data::{BezierCurve, BezierSegment};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

fn push_curve_to(result: &mut String, segment: &BezierSegment) {
    let [_, c1, c2, p1] = segment.points;
    result.push_str(&format!(
        " C{},{},{},{},{},{}",
        c1.x, c1.y, c2.x, c2.y, p1.x, p1.y
    ));
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        let start = self.start_point();
        let mut result = format!("M{},{}", start.x, start.y);
        push_curve_to(&mut result, self);
        result
    }
}

impl ToSvgPath for BezierCurve {
    fn to_svg_path(&self) -> String {
        let Some(start) = self.start_point() else {
            return String::new();
        };

        let mut result = format!("M{},{}", start.x, start.y);
        for segment in &self.segments {
            push_curve_to(&mut result, segment);
        }

        result
    }
}

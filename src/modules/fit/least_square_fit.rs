//! Fitting a single cubic bezier segment to a set of points using the least squares method
//!
//! Based on Philip J. Schneider, "An Algorithm for Automatically Fitting
//! Digitized Curves", Graphics Gems (1990).
//!
//! Unlike an unconstrained fit, the end points of the segment are pinned to the
//! first and last input points and the interior control points are forced to lie
//! on the given end tangents:
//!
//! ```text
//! c1 = p0 + alpha_l * left_tangent
//! c2 = p1 + alpha_r * right_tangent
//! ```
//!
//! leaving a 2x2 linear system for the two tangent scales, solved with Cramer's rule.
//!
//! # Example
//!
//! ```rust
//! use fit_curves::modules::fit::least_square_fit::fit_single_segment;
//! use fit_curves::modules::fit::t_heuristic::chord_length_parameterize;
//! use fit_curves::{Point, Vec2};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.5),
//!     Point::new(2.0, 1.8),
//!     Point::new(3.0, 0.0),
//! ];
//! let params = chord_length_parameterize(&points);
//! let left = (points[1] - points[0]).normalize();
//! let right = (points[2] - points[3]).normalize();
//!
//! let segment = fit_single_segment(&points, &params, left, right).unwrap();
//! assert_eq!(segment.start_point(), points[0]);
//! assert_eq!(segment.end_point(), points[3]);
//! ```

use nalgebra::{Matrix2, Vector2};

use crate::constants::{ALPHA_EPSILON_FACTOR, HEURISTIC_HANDLE_DIVISOR};
use crate::data::{BezierSegment, Point, Vec2};
use crate::error::{BezierError, BezierResult};

/// Segment whose interior control points sit at a third of the chord length
/// along each tangent. Used for two-point regions and as the fallback when the
/// least squares solution is unusable.
pub fn heuristic_segment(
    first_point: Point,
    last_point: Point,
    left_tangent: Vec2,
    right_tangent: Vec2,
) -> BezierSegment {
    let dist = first_point.distance(&last_point) / HEURISTIC_HANDLE_DIVISOR;
    BezierSegment::cubic(
        first_point,
        first_point + left_tangent * dist,
        last_point + right_tangent * dist,
        last_point,
    )
}

/// Least squares cubic through the first and last of `points`, with interior
/// control points constrained to the given tangents.
///
/// `params` holds one curve parameter per point (chord-length estimates or
/// Newton-Raphson refined ones). The tangents are unit vectors pointing from each
/// end point into the curve.
pub fn generate_bezier(
    points: &[Point],
    params: &[f64],
    left_tangent: Vec2,
    right_tangent: Vec2,
) -> BezierSegment {
    let first_point = points[0];
    let last_point = points[points.len() - 1];
    let straight_line = BezierSegment::straight_line(first_point, last_point);

    // Normal equations C * [alpha_l, alpha_r]^T = X
    let mut c = Matrix2::<f64>::zeros();
    let mut x = Vector2::<f64>::zeros();

    for (point, &u) in points.iter().zip(params) {
        let ux = 1.0 - u;
        let a0 = left_tangent * (3.0 * u * (ux * ux));
        let a1 = right_tangent * (3.0 * ux * (u * u));

        c[(0, 0)] += a0.dot(&a0);
        c[(0, 1)] += a0.dot(&a1);
        c[(1, 0)] += a0.dot(&a1);
        c[(1, 1)] += a1.dot(&a1);

        // Difference between the actual point and the straight line at u
        let tmp = *point - straight_line.point_at(u);

        x[0] += a0.dot(&tmp);
        x[1] += a1.dot(&tmp);
    }

    // Cramer's rule
    let det_c0_c1 = c.determinant();
    let det_c0_x = Matrix2::from_columns(&[c.column(0).into_owned(), x]).determinant();
    let det_x_c1 = Matrix2::from_columns(&[x, c.column(1).into_owned()]).determinant();

    let (alpha_l, alpha_r) = if det_c0_c1 == 0.0 {
        (0.0, 0.0)
    } else {
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    // A negative alpha flips the handle backwards and a zero alpha gives coincident
    // control points, which break the Newton-Raphson step later on.
    let seg_length = first_point.distance(&last_point);
    let epsilon = ALPHA_EPSILON_FACTOR * seg_length;
    if alpha_l < epsilon || alpha_r < epsilon {
        return heuristic_segment(first_point, last_point, left_tangent, right_tangent);
    }

    BezierSegment::cubic(
        first_point,
        first_point + left_tangent * alpha_l,
        last_point + right_tangent * alpha_r,
        last_point,
    )
}

/// Checked variant of [`generate_bezier`] for callers outside the recursive fitter.
pub fn fit_single_segment(
    points: &[Point],
    params: &[f64],
    left_tangent: Vec2,
    right_tangent: Vec2,
) -> BezierResult<BezierSegment> {
    if points.len() < 2 || points.len() != params.len() {
        return Err(BezierError::FitError(format!(
            "At least 2 points are required and number of points must match number of parameters (got {} points, {} parameters)",
            points.len(),
            params.len()
        )));
    }

    Ok(generate_bezier(points, params, left_tangent, right_tangent))
}

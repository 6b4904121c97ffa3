//! Newton-Raphson refinement of the curve parameters of fitted points.
//!
//! For a point `p` and estimate `u`, the closest curve point satisfies
//! `f(u) = (B(u) - p) . B'(u) = 0`. One Newton step gives
//!
//! ```text
//!                  (B(u) - p) . B'(u)
//! u' = u - ----------------------------------
//!          |B'(u)|^2 + 2 (B(u) - p) . B''(u)
//! ```
//!
//! The result is not clamped to `[0, 1]`.

use crate::data::{BezierSegment, Point};

/// One Newton-Raphson step for `point` starting from the estimate `u`.
///
/// A zero denominator leaves `u` unchanged.
pub fn newton_raphson_root_find(bezier: &BezierSegment, point: Point, u: f64) -> f64 {
    let d = bezier.point_at(u) - point;
    let q1 = bezier.derivative_at(u);
    let q2 = bezier.second_derivative_at(u);

    let numerator = d.dot(&q1);
    let denominator = q1.length_squared() + 2.0 * d.dot(&q2);

    if denominator == 0.0 {
        u
    } else {
        u - numerator / denominator
    }
}

/// Refine every parameter in `params` by one Newton-Raphson step against `bezier`.
pub fn reparameterize(bezier: &BezierSegment, points: &[Point], params: &[f64]) -> Vec<f64> {
    points
        .iter()
        .zip(params)
        .map(|(&point, &u)| newton_raphson_root_find(bezier, point, u))
        .collect()
}

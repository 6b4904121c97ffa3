//! Initial `t` estimates for points that are about to be fitted.
//!
//! Chord-length parameterization: each point gets the fraction of the total
//! polyline length travelled to reach it. See the Bezier primer, chap. 35
//! <https://pomax.github.io/bezierinfo/#curvefitting>.

use crate::data::Point;

/// Chord-length parameters of `points`, one per point, spanning exactly `[0, 1]`.
///
/// The caller guarantees at least two points and a non-zero total length
/// (duplicates are removed before fitting).
pub fn chord_length_parameterize(points: &[Point]) -> Vec<f64> {
    let mut params = Vec::with_capacity(points.len());
    let mut total = 0.0;

    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += point.distance(&points[i - 1]);
        }
        params.push(total);
    }

    params.iter().map(|u| u / total).collect()
}

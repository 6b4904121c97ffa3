//! Maximum deviation between a candidate segment and the points it should follow.
//!
//! Curve parameter `t` is not linear in arc length, so a point's chord-length
//! fraction `u` cannot be plugged straight into `B(t)`. Instead the curve is
//! sampled at a handful of uniform `t` values, the chord lengths between those
//! samples are accumulated into a normalized length table, and each `u` is
//! mapped to `t` by linear interpolation inside that table. The point is then
//! compared against the curve point at the same relative distance along the curve.

use crate::data::{BezierSegment, Point};

/// Normalized cumulative length of `bezier` at `t = i / granularity` for `i` in `0..=granularity`.
///
/// The first entry is 0 and the last is 1 for any curve of non-zero length.
pub fn map_t_to_relative_distances(bezier: &BezierSegment, granularity: usize) -> Vec<f64> {
    let mut distances = Vec::with_capacity(granularity + 1);
    distances.push(0.0);

    let mut total_length = 0.0;
    let mut previous = bezier.start_point();
    for i in 1..=granularity {
        let current = bezier.point_at(i as f64 / granularity as f64);
        total_length += current.distance(&previous);
        distances.push(total_length);
        previous = current;
    }

    distances.iter().map(|d| d / total_length).collect()
}

/// Curve parameter `t` at which `bezier` has covered the fraction `u` of its length.
///
/// `u` outside `[0, 1]` is clamped to the nearest end.
pub fn find_t(u: f64, t_dist_map: &[f64]) -> f64 {
    if u < 0.0 {
        return 0.0;
    }
    if u > 1.0 {
        return 1.0;
    }

    let granularity = t_dist_map.len() - 1;

    // Find the two sampled distances that bracket u and interpolate between their t
    for i in 1..=granularity {
        if u <= t_dist_map[i] {
            let t_min = (i - 1) as f64 / granularity as f64;
            let t_max = i as f64 / granularity as f64;
            let len_min = t_dist_map[i - 1];
            let len_max = t_dist_map[i];

            if len_max == len_min {
                return t_min;
            }
            return (u - len_min) / (len_max - len_min) * (t_max - t_min) + t_min;
        }
    }

    0.0
}

/// Largest squared distance between a point and the curve, and the index of that point.
///
/// `params` are the chord-length parameters of `points` on the source polyline.
/// Ties keep the earliest index. When no point deviates at all the reported index
/// is the middle of the range.
pub fn compute_max_error(
    points: &[Point],
    bezier: &BezierSegment,
    params: &[f64],
    granularity: usize,
) -> (f64, usize) {
    let mut max_dist = 0.0;
    let mut split_point = points.len() / 2;

    let t_dist_map = map_t_to_relative_distances(bezier, granularity);

    for (i, (point, &u)) in points.iter().zip(params).enumerate() {
        let t = find_t(u, &t_dist_map);

        // Only the maximum matters, so the square root is skipped
        let dist = (bezier.point_at(t) - *point).length_squared();

        if dist > max_dist {
            max_dist = dist;
            split_point = i;
        }
    }

    (max_dist, split_point)
}

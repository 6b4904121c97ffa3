//! Fit a sequence of points with as few cubic bezier segments as the tolerance allows
//!
//! see Philip J. Schneider, "An Algorithm for Automatically Fitting Digitized
//! Curves", Graphics Gems (1990)
//!
//! The method goes like this:
//! 1. Remove duplicate points and estimate the end tangents of the whole stroke
//! 2. Estimate t values using chord length parameterization
//! 3. Solve for the interior control points given t values and end tangents
//! 4. Measure the largest deviation of any point from the candidate segment
//! 5. Accept the segment if the deviation is within tolerance; if it is merely
//!    close, refine the t values with Newton-Raphson and go to step 3
//! 6. Otherwise split the points at the worst point and fit both halves, sharing
//!    a tangent at the split so that the path stays smooth
//!
//! Regions that remain to be fitted are kept on an explicit stack rather than
//! the call stack, so pathological strokes cannot exhaust it.
//!
//! # Example
//!
//! ```rust
//! use fit_curves::{fit_curves, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(20.0, 0.0),
//! ];
//!
//! let curve = fit_curves(&points, 1.0).unwrap();
//! assert_eq!(curve.len(), 3);
//! assert_eq!(curve.start_point(), Some(points[0]));
//! assert_eq!(curve.end_point(), Some(points[3]));
//! assert!(curve.is_continuous());
//! ```

use std::collections::HashSet;

use log::{debug, trace};

use crate::config::FitConfig;
use crate::data::{BezierCurve, BezierSegment, Point, Vec2};
use crate::error::BezierResult;
use crate::modules::fit::least_square_fit::{generate_bezier, heuristic_segment};
use crate::modules::fit::max_error::compute_max_error;
use crate::modules::fit::reparameterize::reparameterize;
use crate::modules::fit::t_heuristic::chord_length_parameterize;

/// Fit `points` with cubic segments that stay within `tolerance` of every point.
///
/// `tolerance` is a linear distance and must be finite and positive. Fewer than
/// two distinct points produce an empty curve.
pub fn fit_curves(points: &[Point], tolerance: f64) -> BezierResult<BezierCurve> {
    fit_curves_with_config(points, &FitConfig::new(tolerance))
}

/// [`fit_curves`] with every fitting parameter exposed.
pub fn fit_curves_with_config(points: &[Point], config: &FitConfig) -> BezierResult<BezierCurve> {
    config.validate()?;

    let points = dedupe_points(points);
    debug!(
        "fitting {} distinct points with tolerance {}",
        points.len(),
        config.tolerance
    );

    if points.len() < 2 {
        return Ok(BezierCurve::default());
    }

    let len = points.len();
    let left_tangent = create_tangent(points[1], points[0]);
    let right_tangent = create_tangent(points[len - 2], points[len - 1]);

    let segments = fit_cubic(&points, left_tangent, right_tangent, config);
    debug!("fitted {} segments", segments.len());

    Ok(BezierCurve::new(segments))
}

/// Remove every point that exactly equals an earlier one, keeping first occurrences in order.
///
/// Equality is raw floating point equality of both coordinates: points that differ
/// only in the last bit are kept apart.
pub fn dedupe_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .copied()
        .filter(|point| point.x.is_nan() || point.y.is_nan() || seen.insert(point_key(point)))
        .collect()
}

// Bit patterns compare like `==` once -0.0 is folded into 0.0; NaN points never get here
fn point_key(point: &Point) -> (u64, u64) {
    fn coordinate_bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0f64.to_bits()
        } else {
            value.to_bits()
        }
    }

    (coordinate_bits(point.x), coordinate_bits(point.y))
}

/// Unit vector pointing from `p1` towards `p0`. Coincident points give the zero vector.
pub fn create_tangent(p0: Point, p1: Point) -> Vec2 {
    (p0 - p1).normalize()
}

/// A range of points (inclusive at both ends) still waiting to be fitted
#[derive(Debug, Clone, Copy)]
struct PendingRange {
    start: usize,
    end: usize,
    left_tangent: Vec2,
    right_tangent: Vec2,
}

/// What happened to a single range of points
#[derive(Debug, Clone, Copy, PartialEq)]
enum RangeFit {
    /// The range is covered by one segment
    Accepted(BezierSegment),
    /// The range must be split at `index` (relative to the range start);
    /// `to_center_tangent` is the tangent the left half ends with
    Split {
        index: usize,
        to_center_tangent: Vec2,
    },
}

/// Fit already deduplicated `points` between the given end tangents.
///
/// Segments come out in path order: each one starts on the point where the
/// previous one ended.
pub fn fit_cubic(
    points: &[Point],
    left_tangent: Vec2,
    right_tangent: Vec2,
    config: &FitConfig,
) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return vec![];
    }

    let mut segments = Vec::new();
    let mut pending = vec![PendingRange {
        start: 0,
        end: points.len() - 1,
        left_tangent,
        right_tangent,
    }];

    // Last in, first out: the left half of a split is pushed last so that it is
    // completely fitted before the right half
    while let Some(range) = pending.pop() {
        let region = &points[range.start..=range.end];

        match fit_range(region, range.left_tangent, range.right_tangent, config) {
            RangeFit::Accepted(segment) => segments.push(segment),
            RangeFit::Split {
                index,
                to_center_tangent,
            } => {
                let split = range.start + index;
                trace!(
                    "splitting points {}..={} at {}",
                    range.start,
                    range.end,
                    split
                );

                pending.push(PendingRange {
                    start: split,
                    end: range.end,
                    left_tangent: -to_center_tangent,
                    right_tangent: range.right_tangent,
                });
                pending.push(PendingRange {
                    start: range.start,
                    end: split,
                    left_tangent: range.left_tangent,
                    right_tangent: to_center_tangent,
                });
            }
        }
    }

    segments
}

/// Try to cover `points` with a single segment, refining the parameterization
/// when the first attempt is close; otherwise report where to split.
fn fit_range(
    points: &[Point],
    left_tangent: Vec2,
    right_tangent: Vec2,
    config: &FitConfig,
) -> RangeFit {
    // Two points: nothing to solve for
    if points.len() == 2 {
        return RangeFit::Accepted(heuristic_segment(
            points[0],
            points[1],
            left_tangent,
            right_tangent,
        ));
    }

    let acceptance = config.acceptance_threshold();

    // The error is always measured against the chord-length parameters: the
    // candidate is compared with the source polyline, not with its own refinement
    let params = chord_length_parameterize(points);
    let mut bezier = generate_bezier(points, &params, left_tangent, right_tangent);
    let (mut max_error, mut split_point) =
        compute_max_error(points, &bezier, &params, config.granularity);

    if max_error == 0.0 || max_error < acceptance {
        trace!("accepted {} points, max error {}", points.len(), max_error);
        return RangeFit::Accepted(bezier);
    }

    if max_error < config.refinement_threshold() {
        let mut refined_params = params.clone();
        let mut prev_error = max_error;
        let mut prev_split = split_point;

        for iteration in 0..config.max_iterations {
            refined_params = reparameterize(&bezier, points, &refined_params);
            bezier = generate_bezier(points, &refined_params, left_tangent, right_tangent);
            (max_error, split_point) =
                compute_max_error(points, &bezier, &params, config.granularity);

            if max_error < acceptance {
                trace!(
                    "accepted {} points after {} refinements, max error {}",
                    points.len(),
                    iteration + 1,
                    max_error
                );
                return RangeFit::Accepted(bezier);
            }

            // The fit has stopped improving: give up and try shorter curves
            if split_point == prev_split && config.is_stagnant(max_error / prev_error) {
                trace!("refinement stalled after {} iterations", iteration + 1);
                break;
            }

            prev_error = max_error;
            prev_split = split_point;
        }
    }

    // The end points never carry error, but keep the neighbours of the split in range
    let index = split_point.clamp(1, points.len() - 2);

    RangeFit::Split {
        index,
        to_center_tangent: center_tangent(points, index),
    }
}

/// Tangent at the split point, taken from the chord between its neighbours.
///
/// When the neighbours coincide the chord from the previous point to the split
/// point is rotated by 90 degrees instead.
fn center_tangent(points: &[Point], split: usize) -> Vec2 {
    let mut center_vector = points[split - 1] - points[split + 1];

    if center_vector.is_zero() {
        center_vector = (points[split - 1] - points[split]).perpendicular();
    }

    center_vector.normalize()
}

//! Bezier segment: a cubic bezier curve segment and its derivatives

use serde::{Deserialize, Serialize};

use crate::data::point::{Point, Vec2};

/// A cubic bezier segment
///
/// Control points are stored as `[p0, c1, c2, p1]`: the two anchored end points
/// and the two interior control points between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub points: [Point; 4],
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn cubic(p0: Point, c1: Point, c2: Point, p1: Point) -> Self {
        Self {
            points: [p0, c1, c2, p1],
        }
    }

    /// The degenerate straight line from `start` to `end`, with each interior
    /// control point collapsed onto the nearer end point
    pub fn straight_line(start: Point, end: Point) -> Self {
        Self::cubic(start, start, end, end)
    }

    pub fn start_point(&self) -> Point {
        self.points[0]
    }

    pub fn end_point(&self) -> Point {
        self.points[3]
    }

    /// The two interior control points `(c1, c2)`
    pub fn control_points(&self) -> (Point, Point) {
        (self.points[1], self.points[2])
    }

    /// Get a point on the bezier curve at parameter t
    ///
    /// `t` outside `[0, 1]` extrapolates the cubic polynomial.
    pub fn point_at(&self, t: f64) -> Point {
        let [p0, c1, c2, p1] = self.points;
        let tx = 1.0 - t;

        // B(t) = (1-t)^3 * p0 + 3(1-t)^2 * t * c1 + 3(1-t) * t^2 * c2 + t^3 * p1
        let x = (p0.x * tx * tx * tx + c1.x * 3.0 * tx * tx * t)
            + (c2.x * 3.0 * tx * t * t + p1.x * t * t * t);
        let y = (p0.y * tx * tx * tx + c1.y * 3.0 * tx * tx * t)
            + (c2.y * 3.0 * tx * t * t + p1.y * t * t * t);

        Point::new(x, y)
    }

    /// First derivative with respect to t
    pub fn derivative_at(&self, t: f64) -> Vec2 {
        let [p0, c1, c2, p1] = self.points;
        let tx = 1.0 - t;
        let d1 = c1 - p0;
        let d2 = c2 - c1;
        let d3 = p1 - c2;

        // B'(t) = 3(1-t)^2 (c1 - p0) + 6(1-t)t (c2 - c1) + 3t^2 (p1 - c2)
        Vec2::new(
            d1.x * 3.0 * tx * tx + d2.x * 6.0 * tx * t + d3.x * 3.0 * t * t,
            d1.y * 3.0 * tx * tx + d2.y * 6.0 * tx * t + d3.y * 3.0 * t * t,
        )
    }

    /// Second derivative with respect to t
    pub fn second_derivative_at(&self, t: f64) -> Vec2 {
        let [p0, c1, c2, p1] = self.points;
        let tx = 1.0 - t;

        // B''(t) = 6(1-t) (p0 - 2c1 + c2) + 6t (c1 - 2c2 + p1)
        Vec2::new(
            (p0.x + (c2.x - c1.x * 2.0)) * (6.0 * tx) + (c1.x + (p1.x - c2.x * 2.0)) * (6.0 * t),
            (p0.y + (c2.y - c1.y * 2.0)) * (6.0 * tx) + (c1.y + (p1.y - c2.y * 2.0)) * (6.0 * t),
        )
    }

    /// Generate a series of points along the bezier curve, evenly spaced in t
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.start_point()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }

    /// Sample points at specific t values
    pub fn sample_at_t_values(&self, t_values: &[f64]) -> (Vec<Point>, Vec<f64>) {
        let points = t_values.iter().map(|&t| self.point_at(t)).collect();
        (points, t_values.to_vec())
    }
}

//! This module provides convenient macros for creating points, segments, and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a Vec2
#[macro_export]
macro_rules! vec2 {
    ($x:expr, $y:expr) => {
        $crate::data::Vec2::new($x as f64, $y as f64)
    };
}

/// Macro for creating a cubic bezier segment
#[macro_export]
macro_rules! cubic {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::BezierSegment::cubic(
            $crate::pt!(points[0].0, points[0].1),
            $crate::pt!(points[1].0, points[1].1),
            $crate::pt!(points[2].0, points[2].1),
            $crate::pt!(points[3].0, points[3].1),
        )
    }};
}

/// Macro for creating a Bezier curve from segments
#[macro_export]
macro_rules! curve {
    // Create from a list of segments
    ([$($segment:expr),*]) => {{
        let segments = vec![$($segment),*];
        $crate::data::BezierCurve::new(segments)
    }};

    // Create from an existing vector of segments
    ($segments:expr) => {
        $crate::data::BezierCurve::new($segments)
    };
}

/// Macro for creating a Bezier curve from a single segment
#[macro_export]
macro_rules! curve_from {
    ($segment:expr) => {
        $crate::data::BezierCurve::from_segment(&$segment)
    };
}

/// Macro for creating a list of points from coordinate pairs
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::pt!($x, $y)),*]
    };
}

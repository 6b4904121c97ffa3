//! A Bezier curve: a collection of Bezier segments.
//!
//! This is the result type of the curve fitter: an ordered path of cubic
//! segments where each segment starts where the previous one ended.

use serde::{Deserialize, Serialize};

use crate::data::point::Point;
use crate::data::segment::BezierSegment;

/// A Bezier curve consisting of zero or more cubic segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
}

impl BezierCurve {
    /// Create a new bezier curve from a list of segments
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    /// Create a bezier curve from a single segment
    pub fn from_segment(segment: &BezierSegment) -> Self {
        Self {
            segments: vec![*segment],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First point of the path, if any
    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(BezierSegment::start_point)
    }

    /// Last point of the path, if any
    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(BezierSegment::end_point)
    }

    /// True when every segment starts exactly where the previous one ends
    pub fn is_continuous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end_point() == pair[1].start_point())
    }

    /// Sample `per_segment` points from every segment, dropping the duplicated
    /// junction points between consecutive segments
    pub fn sample_points(&self, per_segment: usize) -> Vec<Point> {
        let mut result = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            let samples = segment.sample_points(per_segment);
            let skip = if i > 0 && !samples.is_empty() { 1 } else { 0 };
            result.extend(samples.into_iter().skip(skip));
        }
        result
    }
}

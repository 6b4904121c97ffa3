//! JSON interchange for input strokes and fitted curves
//!
//! Points are read either as objects or as coordinate pairs, which can be mixed:
//!
//! ```json
//! [{"x": 0.0, "y": 0.0}, [10.0, 10.0], {"x": 20.0, "y": 0.0}]
//! ```
//!
//! Curves are written with the serde layout of [`BezierCurve`]:
//!
//! ```json
//! {"segments": [{"points": [{"x": 0.0, "y": 0.0}, ..., {"x": 20.0, "y": 0.0}]}]}
//! ```
//!
//! # Example
//!
//! ```rust
//! use fit_curves::fit_curves;
//! use fit_curves::modules::parse::json::{curve_from_json, curve_to_json, points_from_json};
//!
//! let points = points_from_json("[[0, 0], [10, 10], [10, 0], [20, 0]]").unwrap();
//! let curve = fit_curves(&points, 1.0).unwrap();
//!
//! let json = curve_to_json(&curve).unwrap();
//! assert_eq!(curve_from_json(&json).unwrap(), curve);
//! ```

use serde::Deserialize;

use crate::data::{BezierCurve, Point};
use crate::error::{BezierError, BezierResult};

/// Accepted spellings of a single point
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Object(Point),
    Pair(f64, f64),
}

impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Object(point) => point,
            PointRepr::Pair(x, y) => Point::new(x, y),
        }
    }
}

/// Parse a JSON array of points
pub fn points_from_json(data: &str) -> BezierResult<Vec<Point>> {
    let reprs: Vec<PointRepr> = serde_json::from_str(data)?;
    Ok(reprs.into_iter().map(Point::from).collect())
}

/// Serialize a list of points as an array of `{"x", "y"}` objects
pub fn points_to_json(points: &[Point]) -> BezierResult<String> {
    Ok(serde_json::to_string(points)?)
}

/// Serialize a fitted curve
pub fn curve_to_json(curve: &BezierCurve) -> BezierResult<String> {
    Ok(serde_json::to_string(curve)?)
}

/// Parse a curve written by [`curve_to_json`].
///
/// The segments must form a continuous path.
pub fn curve_from_json(data: &str) -> BezierResult<BezierCurve> {
    let curve: BezierCurve = serde_json::from_str(data)?;

    if let Some(i) = curve
        .segments
        .windows(2)
        .position(|pair| pair[0].end_point() != pair[1].start_point())
    {
        return Err(BezierError::ParseError(format!(
            "segment {} does not start where segment {} ends",
            i + 1,
            i
        )));
    }

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubic, curve, points};

    #[test]
    fn test_parse_points() {
        struct JsonPointsTestCase<'a> {
            name: &'a str,
            json: &'a str,
            expected: Vec<Point>,
        }

        let test_cases = [
            JsonPointsTestCase {
                name: "objects",
                json: r#"[{"x": 0, "y": 0}, {"x": 1.5, "y": -2}]"#,
                expected: points![(0, 0), (1.5, -2)],
            },
            JsonPointsTestCase {
                name: "pairs",
                json: "[[0, 0], [1.5, -2]]",
                expected: points![(0, 0), (1.5, -2)],
            },
            JsonPointsTestCase {
                name: "mixed",
                json: r#"[[0, 0], {"y": -2, "x": 1.5}]"#,
                expected: points![(0, 0), (1.5, -2)],
            },
            JsonPointsTestCase {
                name: "empty",
                json: "[]",
                expected: vec![],
            },
        ];

        for test_case in test_cases {
            let parsed = points_from_json(test_case.json)
                .unwrap_or_else(|e| panic!("Test case {} failed to parse: {}", test_case.name, e));
            assert_eq!(parsed, test_case.expected, "Test case: {}", test_case.name);
        }
    }

    #[test]
    fn test_malformed_points_are_rejected() {
        for json in ["[[0, 0, 0]]", r#"[{"x": 1}]"#, "{\"x\": 1, \"y\": 2}", "[[0, \"a\"]]"] {
            assert!(
                matches!(points_from_json(json), Err(BezierError::Json(_))),
                "{} should not parse",
                json
            );
        }
    }

    #[test]
    fn test_points_written_as_objects() {
        let json = points_to_json(&points![(1, 2)]).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);
    }

    #[test]
    fn test_coordinates_survive_round_trip() {
        // shortest decimal form of these needs exact parsing to come back bit-for-bit
        let hard = [12.357022603955159, 0.1 + 0.2, 1.0 / 3.0, -2.2250738585072014e-308];
        let points: Vec<Point> = hard.iter().map(|&x| Point::new(x, -x)).collect();

        let restored = points_from_json(&points_to_json(&points).unwrap()).unwrap();
        for (expected, actual) in points.iter().zip(restored.iter()) {
            assert_eq!(expected.x.to_bits(), actual.x.to_bits());
            assert_eq!(expected.y.to_bits(), actual.y.to_bits());
        }

        let curve = curve!([
            cubic!([(0.0, 0.0), (12.357022603955159, 1.0 / 3.0), (0.1 + 0.2, 7.0), (10.0, 0.0)]),
            cubic!([(10.0, 0.0), (13.0, 2.0 / 3.0), (17.0, 1.0e-7), (20.0, 0.0)])
        ]);
        assert_eq!(curve_from_json(&curve_to_json(&curve).unwrap()).unwrap(), curve);
    }

    #[test]
    fn test_discontinuous_curve_is_rejected() {
        let broken = curve!([
            cubic!([(0, 0), (1, 1), (2, 1), (3, 0)]),
            cubic!([(4, 0), (5, 1), (6, 1), (7, 0)])
        ]);
        let json = curve_to_json(&broken).unwrap();

        assert!(matches!(
            curve_from_json(&json),
            Err(BezierError::ParseError(_))
        ));
    }
}

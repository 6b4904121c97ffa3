use fit_curves::modules::export::svg_path::ToSvgPath;
use fit_curves::modules::parse::json::{curve_from_json, curve_to_json, points_from_json};
use fit_curves::{cubic, curve_from, fit_curves, fit_curves_with_config, FitConfig};

#[test]
fn test_complete_workflow() {
    // Create a simple cubic Bezier curve
    let original_segment = cubic!([
        (50.0, 200.0),  // Start point
        (100.0, 50.0),  // Control point 1
        (200.0, 50.0),  // Control point 2
        (250.0, 200.0)  // End point
    ]);
    let original_curve = curve_from!(original_segment);

    // Sample points along the curve
    let points = original_segment.sample_points(30);

    // Fit a new curve to the sampled points
    let fitted_curve = fit_curves(&points, 0.5).unwrap();

    // Convert both curves to SVG path data
    let original_path = original_curve.to_svg_path();
    let fitted_path = fitted_curve.to_svg_path();

    // Verify the exact path data
    assert_eq!(original_path, "M50,200 C100,50,200,50,250,200");

    // The fitted path is anchored on the same end points
    assert!(fitted_path.starts_with("M50,200 C"));
    assert!(fitted_path.ends_with(",250,200"));
    assert!(fitted_curve.is_continuous());

    // Every sample lies close to the fitted path
    let dense = fitted_curve.sample_points(200);
    for sample in &points {
        let nearest = dense
            .iter()
            .map(|p| p.distance(sample))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1.0, "sample {:?} is {} away", sample, nearest);
    }
}

#[test]
fn test_json_in_json_out() {
    let input = r#"[{"x": 0, "y": 0}, {"x": 10, "y": 10}, {"x": 10, "y": 0}, {"x": 20, "y": 0}]"#;

    let points = points_from_json(input).unwrap();
    let config: FitConfig = serde_json::from_str(r#"{"tolerance": 1.0, "max_iterations": 20}"#).unwrap();
    let curve = fit_curves_with_config(&points, &config).unwrap();
    assert_eq!(curve.len(), 3);

    let output = curve_to_json(&curve).unwrap();
    let restored = curve_from_json(&output).unwrap();
    assert_eq!(restored, curve);
    assert_eq!(restored.to_svg_path(), curve.to_svg_path());
}

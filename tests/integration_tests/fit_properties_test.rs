use fit_curves::modules::fit::max_error::compute_max_error;
use fit_curves::modules::fit::recursive_fit::dedupe_points;
use fit_curves::modules::fit::t_heuristic::chord_length_parameterize;
use fit_curves::{cubic, fit_curves, points, BezierCurve, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn hand_drawn_stroke() -> Vec<Point> {
    points![
        (244, 92), (247, 93), (251, 95), (254, 96), (258, 97), (261, 97), (265, 97),
        (267, 97), (270, 97), (273, 97), (281, 97), (284, 95), (286, 94), (289, 92),
        (291, 90), (292, 88), (294, 86), (295, 85), (296, 85), (297, 85)
    ]
}

fn scalloped_stroke() -> Vec<Point> {
    (0..=40)
        .map(|i| Point::new(i as f64 * 4.0, ((i % 10) * (10 - i % 10)) as f64))
        .collect()
}

fn cubic_wave() -> Vec<Point> {
    (0..=40)
        .map(|i| {
            let x = (i - 20) as f64;
            Point::new(i as f64, x.powi(3) / 100.0 - 3.0 * x)
        })
        .collect()
}

fn noisy_stroke(seed: u64, count: usize, sigma: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    let source = cubic!([(0.0, 0.0), (40.0, 120.0), (160.0, -80.0), (200.0, 40.0)]);

    source
        .sample_points(count)
        .into_iter()
        .map(|p| Point::new(p.x + noise.sample(&mut rng), p.y + noise.sample(&mut rng)))
        .collect()
}

/// Every segment covers a run of the input points between its end points; check
/// that run against the tolerance with the same error measure the fitter uses.
fn assert_within_tolerance(points: &[Point], curve: &BezierCurve, tolerance: f64) {
    let points = dedupe_points(points);
    let mut start = 0;

    for (i, segment) in curve.segments.iter().enumerate() {
        assert_eq!(points[start], segment.start_point(), "segment {} start", i);

        let end = start
            + points[start..]
                .iter()
                .skip(1)
                .position(|p| *p == segment.end_point())
                .expect("segment end is an input point")
            + 1;

        let run = &points[start..=end];
        let params = chord_length_parameterize(run);
        let (max_error, _) = compute_max_error(run, segment, &params, 10);
        assert!(
            max_error < tolerance * tolerance,
            "segment {} deviates by {} (squared)",
            i,
            max_error
        );

        start = end;
    }

    assert_eq!(start, points.len() - 1, "curve ends at the last point");
}

#[test]
fn test_fit_is_deterministic() {
    let points = noisy_stroke(7, 120, 1.5);

    let first = fit_curves(&points, 2.0).unwrap();
    let second = fit_curves(&points, 2.0).unwrap();

    // bit-for-bit identical
    assert_eq!(first, second);
}

#[test]
fn test_endpoints_are_anchored_and_continuous() {
    for seed in 0..5 {
        let points = noisy_stroke(seed, 80, 2.0);
        let curve = fit_curves(&points, 1.5).unwrap();

        assert!(!curve.is_empty());
        assert_eq!(curve.start_point(), Some(points[0]));
        assert_eq!(curve.end_point(), points.last().copied());
        assert!(curve.is_continuous());

        for segment in &curve.segments {
            assert!(points.contains(&segment.start_point()));
            assert!(points.contains(&segment.end_point()));
        }
    }
}

#[test]
fn test_every_segment_respects_tolerance() {
    for (seed, tolerance) in [(11, 0.5), (12, 1.0), (13, 3.0), (14, 8.0)] {
        let points = noisy_stroke(seed, 100, 1.0);
        let curve = fit_curves(&points, tolerance).unwrap();
        assert_within_tolerance(&points, &curve, tolerance);
    }

    for points in [hand_drawn_stroke(), scalloped_stroke(), cubic_wave()] {
        for tolerance in [0.5, 2.0, 10.0] {
            let curve = fit_curves(&points, tolerance).unwrap();
            assert_within_tolerance(&points, &curve, tolerance);
        }
    }
}

#[test]
fn test_larger_tolerance_never_adds_segments() {
    let tolerances = [0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 8.0, 13.0, 20.0, 50.0, 100.0];

    for points in [
        points![(0, 0), (10, 10), (10, 0), (20, 0)],
        hand_drawn_stroke(),
        scalloped_stroke(),
        cubic_wave(),
    ] {
        let counts: Vec<usize> = tolerances
            .iter()
            .map(|&tolerance| fit_curves(&points, tolerance).unwrap().len())
            .collect();

        assert!(
            counts.windows(2).all(|pair| pair[1] <= pair[0]),
            "segment counts {:?} are not monotonic",
            counts
        );
        assert_eq!(counts.last(), Some(&1));
    }
}

#[test]
fn test_trailing_duplicate_changes_nothing() {
    for points in [hand_drawn_stroke(), noisy_stroke(3, 60, 1.0)] {
        let mut with_duplicate = points.clone();
        with_duplicate.push(*points.last().unwrap());

        assert_eq!(
            fit_curves(&points, 1.0).unwrap(),
            fit_curves(&with_duplicate, 1.0).unwrap()
        );
    }
}

#[test]
fn test_straight_line_is_one_segment() {
    let points: Vec<Point> = (0..50).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();

    let curve = fit_curves(&points, 0.01).unwrap();

    assert_eq!(curve.len(), 1);
}

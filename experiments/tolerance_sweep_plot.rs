// Sample a known cubic, add gaussian noise, and fit the noisy stroke over a sweep
// of tolerances. Plots the number of fitted segments against the tolerance.
//
// usage: fit-curves-tolerance-sweep-plot [output.svg]

use fit_curves::modules::export::svg_path::ToSvgPath;
use fit_curves::{cubic, fit_curves, Point};
use log::{error, info};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::error::Error;

const SAMPLE_COUNT: usize = 200;
const NOISE_SIGMA: f64 = 1.5;
const SEED: u64 = 42;

fn noisy_samples() -> Result<Vec<Point>, Box<dyn Error>> {
    let source = cubic!([(50.0, 200.0), (100.0, 50.0), (200.0, 350.0), (250.0, 200.0)]);
    let noise = Normal::new(0.0, NOISE_SIGMA)?;
    let mut rng = StdRng::seed_from_u64(SEED);

    Ok(source
        .sample_points(SAMPLE_COUNT)
        .into_iter()
        .map(|p| Point::new(p.x + noise.sample(&mut rng), p.y + noise.sample(&mut rng)))
        .collect())
}

fn run(output: &str) -> Result<(), Box<dyn Error>> {
    let points = noisy_samples()?;
    info!("Fitting {} noisy samples (sigma {})", points.len(), NOISE_SIGMA);

    let tolerances: Vec<f64> = (0..40).map(|i| 0.25 * 1.15f64.powi(i)).collect();
    let mut sweep = Vec::with_capacity(tolerances.len());
    for &tolerance in &tolerances {
        let curve = fit_curves(&points, tolerance)?;
        info!("tolerance {:>8.3}: {:>4} segments", tolerance, curve.len());
        sweep.push((tolerance, curve.len()));
    }

    if let Some(&(tolerance, _)) = sweep.iter().find(|(_, count)| *count <= 4) {
        let curve = fit_curves(&points, tolerance)?;
        info!("Path at tolerance {:.3}: {}", tolerance, curve.to_svg_path());
    }

    let max_count = sweep.iter().map(|&(_, count)| count).max().unwrap_or(1);
    let max_tolerance = tolerances.last().copied().unwrap_or(1.0);

    let root = SVGBackend::new(output, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fitted segments vs tolerance", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..max_tolerance, 0.0..(max_count as f64 + 1.0))?;

    chart
        .configure_mesh()
        .x_desc("tolerance")
        .y_desc("segments")
        .draw()?;

    chart.draw_series(LineSeries::new(
        sweep.iter().map(|&(tolerance, count)| (tolerance, count as f64)),
        &BLUE,
    ))?;
    chart.draw_series(
        sweep
            .iter()
            .map(|&(tolerance, count)| Circle::new((tolerance, count as f64), 3, BLUE.filled())),
    )?;

    root.present()?;
    info!("Plot written to {}", output);

    Ok(())
}

fn main() {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tolerance_sweep.svg".to_string());

    if let Err(e) = run(&output) {
        error!("Tolerance sweep failed: {}", e);
        std::process::exit(1);
    }
}

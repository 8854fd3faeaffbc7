//! Unit tests for load-velocity profile fitting.

use lvprofile::metrics::profile::{
    first_max_index, LoadVelocityLine, ProfileFitError, ProfileFitter, Sample, GRID_POINTS,
};

const EPS: f64 = 1e-9;

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample> {
    pairs.iter().map(|&(load, velocity)| Sample::new(load, velocity)).collect()
}

#[test]
fn test_collinear_samples_recover_line() {
    // load = -42.5 * v + 137.0
    let data: Vec<Sample> = [0.35, 0.6, 0.82, 1.1, 1.47]
        .iter()
        .map(|&v| Sample::new(-42.5 * v + 137.0, v))
        .collect();

    let fit = ProfileFitter::new().fit(&data).unwrap();

    assert!((fit.result.slope + 42.5).abs() < EPS);
    assert!((fit.result.intercept - 137.0).abs() < EPS);
    assert!((fit.result.r_squared - 1.0).abs() < EPS);
    assert!((fit.result.v0 - 137.0 / 42.5).abs() < EPS);
}

#[test]
fn test_positive_slope_is_still_fitted() {
    let data = samples(&[(20.0, 0.5), (40.0, 1.0), (60.0, 1.5)]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    assert!((fit.result.slope - 40.0).abs() < EPS);
    assert!(fit.result.intercept.abs() < EPS);
    assert!(fit.result.v0.abs() < EPS);
}

#[test]
fn test_reference_scenario() {
    let data = samples(&[(100.0, 0.5), (50.0, 1.5), (0.0, 2.5)]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    assert_eq!(fit.result.slope, -50.0);
    assert_eq!(fit.result.intercept, 125.0);
    assert_eq!(fit.result.v0, 2.5);
    assert_eq!(fit.result.f0, 125.0);
    assert_eq!(fit.result.r_squared, 1.0);
}

#[test]
fn test_zero_slope_gives_zero_v0() {
    let data = samples(&[(10.0, 1.0), (20.0, 2.0), (10.0, 3.0)]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    assert_eq!(fit.result.slope, 0.0);
    assert_eq!(fit.result.v0, 0.0);
    assert!(fit.result.v0.is_finite());
    assert_eq!(LoadVelocityLine::new(0.0, 55.0).velocity_intercept(), 0.0);
}

#[test]
fn test_grid_is_independent_of_samples() {
    let sets = [
        samples(&[(100.0, 0.5), (50.0, 1.5)]),
        samples(&[(180.0, 0.2), (150.0, 0.4), (120.0, 0.6), (60.0, 1.0)]),
        samples(&[(5.0, 2.9), (7.0, 2.8), (9.0, 2.6)]),
    ];

    for data in &sets {
        let fit = ProfileFitter::new().fit(data).unwrap();
        let points = fit.series.points();
        assert_eq!(points.len(), GRID_POINTS);
        assert_eq!(points[0].velocity, 0.0);
        assert_eq!(points[GRID_POINTS - 1].velocity, 3.0);
        assert!(points.windows(2).all(|w| w[0].velocity < w[1].velocity));
    }
}

#[test]
fn test_grid_power_is_load_times_velocity() {
    let line = LoadVelocityLine::new(-50.0, 125.0);
    for p in line.evaluate_grid().points() {
        assert!((p.power - p.load * p.velocity).abs() < EPS);
        assert!((p.power - line.power_at(p.velocity)).abs() < EPS);
    }
}

#[test]
fn test_opl_is_load_at_peak_power() {
    let data = samples(&[(120.0, 0.4), (95.0, 0.8), (85.0, 1.0), (40.0, 1.7)]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    let max_power = fit
        .series
        .points()
        .iter()
        .map(|p| p.power)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(fit.peak_point().power, max_power);
    assert_eq!(fit.result.opl, fit.peak_point().load);
}

#[test]
fn test_peak_ties_resolve_to_lowest_velocity() {
    // load = v - 3: power v(v - 3) is zero at both ends of the grid and
    // negative in between, so the two end points tie for the maximum.
    let data = samples(&[(-3.0, 0.0), (0.0, 3.0)]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    let points = fit.series.points();
    let last = points[GRID_POINTS - 1];
    assert_eq!(fit.result.slope, 1.0);
    assert_eq!(fit.result.intercept, -3.0);
    assert_eq!(points[0].power, last.power);
    assert!(points[1..GRID_POINTS - 1].iter().all(|p| p.power < last.power));

    assert_eq!(fit.peak_index, 0);
    assert_eq!(fit.result.opl, -3.0);
    assert_ne!(fit.result.opl, last.load);

    assert_eq!(first_max_index([3.0, 7.0, 1.0, 7.0, 7.0]), Some(1));
}

#[test]
fn test_noisy_r_squared_bounds() {
    let data = samples(&[
        (140.0, 0.31),
        (118.0, 0.52),
        (104.0, 0.66),
        (90.0, 0.85),
        (71.0, 1.02),
        (64.0, 1.18),
    ]);
    let fit = ProfileFitter::new().fit(&data).unwrap();

    assert!(fit.result.r_squared < 1.0);
    assert!(fit.result.r_squared > 0.95);
}

#[test]
fn test_identical_samples_are_degenerate() {
    let data = samples(&[(10.0, 1.0), (10.0, 1.0)]);
    assert_eq!(
        ProfileFitter::new().fit(&data),
        Err(ProfileFitError::ConstantVelocity)
    );
}

#[test]
fn test_constant_load_is_degenerate() {
    let data = samples(&[(60.0, 0.7), (60.0, 0.9), (60.0, 1.2)]);
    assert_eq!(
        ProfileFitter::new().fit(&data),
        Err(ProfileFitError::ConstantLoad)
    );
}

#[test]
fn test_too_few_samples_are_degenerate() {
    let fitter = ProfileFitter::new();
    assert_eq!(fitter.fit(&[]), Err(ProfileFitError::InsufficientSamples(0)));
    assert_eq!(
        fitter.fit(&samples(&[(60.0, 0.7)])),
        Err(ProfileFitError::InsufficientSamples(1))
    );
}

#[test]
fn test_overflowing_sums_are_rejected() {
    // Every value is finite, but the sums of squares are not.
    let data = samples(&[(1e200, 0.0), (-1e200, 1.0), (5e199, 2.0)]);
    assert_eq!(
        ProfileFitter::new().fit(&data),
        Err(ProfileFitError::NumericOverflow)
    );
    assert!(LoadVelocityLine::new(-2.5e199, 4.17e199)
        .r_squared(&data)
        .is_some_and(f64::is_nan));
}

#[test]
fn test_infinite_sample_is_rejected() {
    let data = samples(&[(60.0, 0.7), (70.0, f64::INFINITY)]);
    assert_eq!(
        ProfileFitter::new().fit(&data),
        Err(ProfileFitError::NonFiniteSample { index: 1 })
    );
}

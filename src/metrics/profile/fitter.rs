//! Load-velocity line fitting.
//!
//! The profile model is a straight line `load = slope × velocity + intercept`
//! fitted by ordinary least squares. From it we derive:
//! - F0: the load intercept (theoretical maximal isometric load)
//! - v0: the velocity intercept (theoretical maximal unloaded velocity)
//! - OPL: the load at which power (load × velocity) peaks on a fixed grid

use serde::{Deserialize, Serialize};

use super::error::{ProfileFitError, ProfileFitResult};

/// Lower bound of the velocity evaluation grid.
pub const GRID_START: f64 = 0.0;
/// Upper bound of the velocity evaluation grid.
pub const GRID_END: f64 = 3.0;
/// Number of points in the velocity evaluation grid.
pub const GRID_POINTS: usize = 300;

/// A single (load, velocity) measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Load lifted (e.g. kg).
    pub load: f64,
    /// Mean concentric velocity (e.g. m/s).
    pub velocity: f64,
}

impl Sample {
    /// Create a sample from a load and a velocity.
    pub fn new(load: f64, velocity: f64) -> Self {
        Self { load, velocity }
    }

    fn is_finite(&self) -> bool {
        self.load.is_finite() && self.velocity.is_finite()
    }
}

/// Scalar outputs of a profile fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Slope of the fitted line (load per unit velocity).
    pub slope: f64,
    /// Load at zero velocity on the fitted line.
    pub intercept: f64,
    /// Velocity at zero load, or 0 when the slope is exactly zero.
    pub v0: f64,
    /// Load-axis intercept (same value as `intercept`).
    pub f0: f64,
    /// Fitted load at the grid velocity of maximal power.
    pub opl: f64,
    /// Coefficient of determination against the original samples.
    pub r_squared: f64,
}

/// One point of the dense evaluation grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub velocity: f64,
    pub load: f64,
    pub power: f64,
}

/// Fitted load and power evaluated over `[GRID_START, GRID_END]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    points: Vec<PlotPoint>,
}

impl PlotSeries {
    /// All grid points in ascending velocity order.
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether every load and power on the grid is a finite number.
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.load.is_finite() && p.power.is_finite())
    }

    /// Index of the first point with maximal power.
    pub fn peak_power_index(&self) -> Option<usize> {
        first_max_index(self.points.iter().map(|p| p.power))
    }

    /// `[velocity, load]` pairs for plotting the fitted line.
    pub fn load_curve(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.velocity, p.load]).collect()
    }

    /// `[velocity, power]` pairs for plotting the power curve.
    pub fn power_curve(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.velocity, p.power]).collect()
    }
}

/// A straight load-velocity line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadVelocityLine {
    pub slope: f64,
    pub intercept: f64,
}

impl LoadVelocityLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Fitted load at the given velocity.
    pub fn load_at(&self, velocity: f64) -> f64 {
        self.slope * velocity + self.intercept
    }

    /// Power (fitted load × velocity) at the given velocity.
    pub fn power_at(&self, velocity: f64) -> f64 {
        self.load_at(velocity) * velocity
    }

    /// Velocity where the line crosses zero load.
    ///
    /// A flat line never crosses, so 0 is returned in that case.
    pub fn velocity_intercept(&self) -> f64 {
        if self.slope == 0.0 {
            0.0
        } else {
            -self.intercept / self.slope
        }
    }

    /// Evaluate the line over the fixed velocity grid.
    pub fn evaluate_grid(&self) -> PlotSeries {
        let points = velocity_grid()
            .map(|velocity| {
                let load = self.load_at(velocity);
                PlotPoint {
                    velocity,
                    load,
                    power: load * velocity,
                }
            })
            .collect();

        PlotSeries { points }
    }

    /// Coefficient of determination of this line against `samples`.
    ///
    /// Returns `None` when the loads have zero variance. The value is NaN
    /// when the sums of squares overflow.
    pub fn r_squared(&self, samples: &[Sample]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean_load = samples.iter().map(|s| s.load).sum::<f64>() / n;
        let ss_total: f64 = samples.iter().map(|s| (s.load - mean_load).powi(2)).sum();
        if ss_total == 0.0 {
            return None;
        }

        let ss_residual: f64 = samples
            .iter()
            .map(|s| (s.load - self.load_at(s.velocity)).powi(2))
            .sum();

        Some(1.0 - ss_residual / ss_total)
    }
}

/// Everything produced by one fit: scalars, grid, and the grid optimum.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFit {
    pub result: FitResult,
    pub series: PlotSeries,
    /// Index into `series` of the optimal power load.
    pub peak_index: usize,
}

impl ProfileFit {
    /// Grid point at which power peaks.
    pub fn peak_point(&self) -> &PlotPoint {
        &self.series.points[self.peak_index]
    }
}

/// Load-velocity profile fitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFitter;

impl ProfileFitter {
    pub fn new() -> Self {
        Self
    }

    /// Fit a load-velocity profile to the given samples.
    pub fn fit(&self, samples: &[Sample]) -> ProfileFitResult<ProfileFit> {
        validate(samples)?;

        let line = least_squares(samples)?;
        let r_squared = line
            .r_squared(samples)
            .ok_or(ProfileFitError::ConstantLoad)?;

        if !r_squared.is_finite() {
            return Err(ProfileFitError::NumericOverflow);
        }

        let series = line.evaluate_grid();
        if !series.is_finite() {
            return Err(ProfileFitError::NumericOverflow);
        }
        // The grid is never empty, so a peak always exists.
        let peak_index = series.peak_power_index().unwrap_or(0);
        let opl = series.points[peak_index].load;

        let result = FitResult {
            slope: line.slope,
            intercept: line.intercept,
            v0: line.velocity_intercept(),
            f0: line.intercept,
            opl,
            r_squared,
        };

        tracing::debug!(
            samples = samples.len(),
            slope = result.slope,
            intercept = result.intercept,
            v0 = result.v0,
            opl = result.opl,
            r_squared = result.r_squared,
            "Fitted load-velocity profile"
        );

        Ok(ProfileFit {
            result,
            series,
            peak_index,
        })
    }
}

/// Evenly spaced velocities over the closed grid interval.
pub fn velocity_grid() -> impl Iterator<Item = f64> {
    let span = GRID_END - GRID_START;
    let last = (GRID_POINTS - 1) as f64;
    (0..GRID_POINTS).map(move |i| GRID_START + span * i as f64 / last)
}

/// Position of the first maximal value, or `None` for an empty sequence.
///
/// Later values only win when strictly greater, so ties resolve to the
/// earliest index.
pub fn first_max_index(values: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

fn validate(samples: &[Sample]) -> ProfileFitResult<()> {
    if samples.len() < 2 {
        return Err(ProfileFitError::InsufficientSamples(samples.len()));
    }

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(ProfileFitError::NonFiniteSample { index });
    }

    let first = samples[0];
    if samples.iter().all(|s| s.velocity == first.velocity) {
        return Err(ProfileFitError::ConstantVelocity);
    }
    if samples.iter().all(|s| s.load == first.load) {
        return Err(ProfileFitError::ConstantLoad);
    }

    Ok(())
}

/// Ordinary least squares of load on velocity.
fn least_squares(samples: &[Sample]) -> ProfileFitResult<LoadVelocityLine> {
    let n = samples.len() as f64;
    let mean_velocity = samples.iter().map(|s| s.velocity).sum::<f64>() / n;
    let mean_load = samples.iter().map(|s| s.load).sum::<f64>() / n;

    let (sxx, sxy) = samples.iter().fold((0.0, 0.0), |(sxx, sxy), s| {
        let dv = s.velocity - mean_velocity;
        (sxx + dv * dv, sxy + dv * (s.load - mean_load))
    });

    if sxx == 0.0 {
        return Err(ProfileFitError::ConstantVelocity);
    }

    let slope = sxy / sxx;
    let intercept = mean_load - slope * mean_velocity;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ProfileFitError::NumericOverflow);
    }

    Ok(LoadVelocityLine::new(slope, intercept))
}

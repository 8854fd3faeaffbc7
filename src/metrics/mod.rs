//! Metrics module for training calculations.

pub mod profile;

pub use profile::{FitResult, PlotSeries, ProfileFit, ProfileFitError, ProfileFitter, Sample};

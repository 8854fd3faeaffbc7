//! Load-velocity-power profiling.
//!
//! Fits a straight line to (load, velocity) samples and derives F0, v0,
//! the optimal power load (OPL) and R².

pub mod error;
pub mod fitter;
pub mod report;

pub use error::{ProfileFitError, ProfileFitResult};
pub use fitter::{
    first_max_index, velocity_grid, FitResult, LoadVelocityLine, PlotPoint, PlotSeries,
    ProfileFit, ProfileFitter, Sample, GRID_END, GRID_POINTS, GRID_START,
};
pub use report::{Annotation, AnnotationKind, ProfileReport};

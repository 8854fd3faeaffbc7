//! LvProfile - Load-Velocity-Power Profile Generator
//!
//! Fits a straight load-velocity line to a handful of measured sets and
//! derives F0, v0, the optimal power load and R², then charts the result.

pub mod input;
pub mod metrics;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use input::{on_generate, on_submit, FormState, InputParseError, SubmitError};
pub use metrics::profile::{
    FitResult, PlotSeries, ProfileFitError, ProfileFitter, ProfileReport, Sample,
};
pub use storage::config::AppConfig;

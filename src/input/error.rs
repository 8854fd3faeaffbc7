//! Form input error types.

use thiserror::Error;

use crate::metrics::profile::ProfileFitError;

/// A form field that failed to parse as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    /// Point count is not a non-negative integer.
    #[error("Number of points must be a whole number, got {0:?}")]
    PointCount(String),

    /// Point count is larger than the form supports.
    #[error("Number of points must be at most {max}, got {count}")]
    TooManyPoints { count: usize, max: usize },

    /// Load entry is not a finite number.
    #[error("Load {} must be a number, got {text:?}", .index + 1)]
    Load {
        /// Zero-based row index.
        index: usize,
        text: String,
    },

    /// Velocity entry is not a finite number.
    #[error("Velocity {} must be a number, got {text:?}", .index + 1)]
    Velocity {
        /// Zero-based row index.
        index: usize,
        text: String,
    },
}

/// Errors that can occur when submitting the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Input(#[from] InputParseError),

    #[error(transparent)]
    Fit(#[from] ProfileFitError),
}

impl SubmitError {
    /// Dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            SubmitError::Input(_) => "Invalid input",
            SubmitError::Fit(_) => "Cannot fit profile",
        }
    }
}

//! Profile fitting error types.

use thiserror::Error;

/// Reasons a load-velocity line cannot be fitted to a sample set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileFitError {
    /// Fewer than two samples were supplied.
    #[error("Insufficient samples (need at least 2, got {0})")]
    InsufficientSamples(usize),

    /// A load or velocity is NaN or infinite.
    #[error("Sample {index} contains a non-finite value")]
    NonFiniteSample {
        /// Zero-based position of the offending sample.
        index: usize,
    },

    /// Every sample has the same velocity, so the slope is undefined.
    #[error("All velocities are identical; the load-velocity slope is undefined")]
    ConstantVelocity,

    /// Every sample has the same load, so R² is undefined.
    #[error("All loads are identical; R² is undefined")]
    ConstantLoad,

    /// Intermediate sums overflowed, so the fit is not representable.
    #[error("Sample values are too large to fit a profile")]
    NumericOverflow,
}

/// Result type for profile fitting.
pub type ProfileFitResult<T> = Result<T, ProfileFitError>;

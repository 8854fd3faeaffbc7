//! Form event handlers.
//!
//! Both handlers are synchronous and side-effect free: they take the current
//! form snapshot and return either a new value or an error for the UI to show.

use super::error::{InputParseError, SubmitError};
use super::form::FormState;
use crate::metrics::profile::{ProfileFitter, ProfileReport};

/// Rebuild the form with as many empty rows as the point count field asks for.
///
/// Labels are carried over; previously entered point values are discarded.
pub fn on_generate(form: &FormState) -> Result<FormState, InputParseError> {
    let count = form.parse_point_count().inspect_err(|e| {
        tracing::warn!("Rejected point count: {}", e);
    })?;

    tracing::debug!("Generating {} point fields", count);
    Ok(FormState::with_points(
        form.action_name.clone(),
        form.time.clone(),
        count,
    ))
}

/// Parse the form and fit a profile.
///
/// Nothing is fitted unless every field parses.
pub fn on_submit(form: &FormState, fitter: &ProfileFitter) -> Result<ProfileReport, SubmitError> {
    let samples = form.parse_samples().inspect_err(|e| {
        tracing::warn!("Rejected form input: {}", e);
    })?;

    let fit = fitter.fit(&samples).inspect_err(|e| {
        tracing::warn!("Profile fit failed: {}", e);
    })?;

    tracing::info!(
        "Generated profile for '{}' ({} points, R² = {:.4})",
        form.action_name,
        samples.len(),
        fit.result.r_squared
    );

    Ok(ProfileReport::new(
        form.action_name.clone(),
        form.time.clone(),
        samples,
        fit,
    ))
}

//! Profile input form state.
//!
//! A `FormState` is rebuilt from scratch whenever the user regenerates the
//! point fields; only the text inside existing rows is edited in place.

use super::error::InputParseError;
use crate::metrics::profile::Sample;

/// Largest number of point rows the form will generate.
pub const MAX_POINTS: usize = 100;

/// Text entered for one (load, velocity) row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointEntry {
    pub load: String,
    pub velocity: String,
}

impl PointEntry {
    pub fn new(load: impl Into<String>, velocity: impl Into<String>) -> Self {
        Self {
            load: load.into(),
            velocity: velocity.into(),
        }
    }
}

/// Snapshot of the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Exercise name used in the chart title
    pub action_name: String,
    /// Free-form session time used in the chart title
    pub time: String,
    /// Raw text of the point count field
    pub num_points: String,
    entries: Vec<PointEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_points(String::new(), today(), 0)
    }
}

impl FormState {
    /// Create a form with `count` empty point rows, at most [`MAX_POINTS`].
    pub fn with_points(action_name: String, time: String, count: usize) -> Self {
        let count = count.min(MAX_POINTS);
        Self {
            action_name,
            time,
            num_points: count.to_string(),
            entries: vec![PointEntry::default(); count],
        }
    }

    /// Create a form from pre-filled rows.
    pub fn with_entries(action_name: String, time: String, entries: Vec<PointEntry>) -> Self {
        Self {
            action_name,
            time,
            num_points: entries.len().to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[PointEntry] {
        &self.entries
    }

    /// Row text for editing. The row count itself is fixed.
    pub fn entries_mut(&mut self) -> &mut [PointEntry] {
        &mut self.entries
    }

    /// Parse the point count field.
    pub fn parse_point_count(&self) -> Result<usize, InputParseError> {
        let count = self
            .num_points
            .trim()
            .parse::<usize>()
            .map_err(|_| InputParseError::PointCount(self.num_points.clone()))?;
        if count > MAX_POINTS {
            return Err(InputParseError::TooManyPoints {
                count,
                max: MAX_POINTS,
            });
        }
        Ok(count)
    }

    /// Parse every row into a sample, failing on the first bad field.
    pub fn parse_samples(&self) -> Result<Vec<Sample>, InputParseError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let load = parse_number(&entry.load).ok_or_else(|| InputParseError::Load {
                    index,
                    text: entry.load.clone(),
                })?;
                let velocity =
                    parse_number(&entry.velocity).ok_or_else(|| InputParseError::Velocity {
                        index,
                        text: entry.velocity.clone(),
                    })?;
                Ok(Sample::new(load, velocity))
            })
            .collect()
    }
}

/// Parse a finite decimal number, ignoring surrounding whitespace.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Today's local date, used as the default session time.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

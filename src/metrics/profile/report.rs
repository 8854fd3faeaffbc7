//! Labelled profile ready for charting.

use super::fitter::{FitResult, ProfileFit, Sample};

/// Which derived metric an annotation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    V0,
    F0,
    Opl,
    RSquared,
}

/// A single text annotation shown beside the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: String,
}

/// A fitted profile together with the labels it was submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileReport {
    pub action_name: String,
    pub time: String,
    pub samples: Vec<Sample>,
    pub fit: ProfileFit,
}

impl ProfileReport {
    pub fn new(action_name: String, time: String, samples: Vec<Sample>, fit: ProfileFit) -> Self {
        Self {
            action_name,
            time,
            samples,
            fit,
        }
    }

    pub fn result(&self) -> &FitResult {
        &self.fit.result
    }

    /// Chart title.
    pub fn title(&self) -> String {
        format!(
            "{} - Velocity-Load and Power Profile at {}",
            self.action_name, self.time
        )
    }

    /// The four metric annotations in display order.
    pub fn annotations(&self) -> [Annotation; 4] {
        let r = self.result();
        [
            Annotation {
                kind: AnnotationKind::V0,
                text: format!("v0 (Intersection with x-axis) = {:.2}", r.v0),
            },
            Annotation {
                kind: AnnotationKind::F0,
                text: format!("F0 (Y-intercept) = {:.2}", r.f0),
            },
            Annotation {
                kind: AnnotationKind::Opl,
                text: format!("OPL (Load at Max Power) = {:.2}", r.opl),
            },
            Annotation {
                kind: AnnotationKind::RSquared,
                text: format!("R^2 = {:.4}", r.r_squared),
            },
        ]
    }

    /// `[velocity, load]` pairs of the raw samples.
    pub fn scatter(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.velocity, s.load]).collect()
    }
}

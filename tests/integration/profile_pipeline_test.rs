//! Integration tests for the form-to-chart pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Generate point fields from a count
//! 2. Fill in the rows
//! 3. Submit and fit the profile
//! 4. Build chart title and annotations

use lvprofile::input::{on_generate, on_submit, FormState, InputParseError, SubmitError};
use lvprofile::metrics::profile::{AnnotationKind, ProfileFitError, ProfileFitter, GRID_POINTS};

/// Builds a generated form and fills its rows.
fn filled_form(action: &str, time: &str, rows: &[(&str, &str)]) -> FormState {
    let mut start = FormState::with_points(action.to_string(), time.to_string(), 0);
    start.num_points = rows.len().to_string();

    let mut form = on_generate(&start).expect("count should parse");
    for (entry, (load, velocity)) in form.entries_mut().iter_mut().zip(rows) {
        entry.load = load.to_string();
        entry.velocity = velocity.to_string();
    }
    form
}

#[test]
fn test_full_pipeline_reference_profile() {
    let form = filled_form(
        "Back Squat",
        "2026-10-18 09:00",
        &[("100", "0.5"), ("50", "1.5"), ("0", "2.5")],
    );

    let report = on_submit(&form, &ProfileFitter::new()).expect("profile should fit");

    assert_eq!(
        report.title(),
        "Back Squat - Velocity-Load and Power Profile at 2026-10-18 09:00"
    );
    assert_eq!(report.samples.len(), 3);
    assert_eq!(report.fit.series.len(), GRID_POINTS);

    let notes = report.annotations();
    let kinds: Vec<AnnotationKind> = notes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AnnotationKind::V0,
            AnnotationKind::F0,
            AnnotationKind::Opl,
            AnnotationKind::RSquared
        ]
    );
    assert_eq!(notes[0].text, "v0 (Intersection with x-axis) = 2.50");
    assert_eq!(notes[1].text, "F0 (Y-intercept) = 125.00");
    assert_eq!(notes[3].text, "R^2 = 1.0000");
}

#[test]
fn test_realistic_bench_press_profile() {
    let form = filled_form(
        "Bench Press",
        "week 6",
        &[("40", "1.21"), ("60", "0.93"), ("80", "0.62"), ("95", "0.38")],
    );

    let report = on_submit(&form, &ProfileFitter::new()).unwrap();
    let result = report.result();

    assert!(result.slope < 0.0);
    assert!(result.f0 > 95.0);
    assert!(result.v0 > 1.21);
    assert!(result.opl > 0.0 && result.opl < result.f0);
    assert!(result.r_squared > 0.98 && result.r_squared <= 1.0);
}

#[test]
fn test_identical_points_produce_no_report() {
    let form = filled_form("Row", "pm", &[("10", "1.0"), ("10", "1.0")]);

    let err = on_submit(&form, &ProfileFitter::new()).unwrap_err();
    assert!(matches!(err, SubmitError::Fit(_)));
    assert_eq!(err.title(), "Cannot fit profile");
}

#[test]
fn test_zero_points_is_insufficient() {
    let form = filled_form("Row", "pm", &[]);

    let err = on_submit(&form, &ProfileFitter::new()).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Fit(ProfileFitError::InsufficientSamples(0))
    );
}

#[test]
fn test_bad_number_stops_before_fitting() {
    let form = filled_form("Row", "pm", &[("10", "1.0"), ("heavy", "0.5"), ("1", "x")]);

    let err = on_submit(&form, &ProfileFitter::new()).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Input(InputParseError::Load {
            index: 1,
            text: "heavy".to_string()
        })
    );
    assert_eq!(err.title(), "Invalid input");
}

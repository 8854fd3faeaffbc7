//! Unit tests for form parsing and the generate handler.

use lvprofile::input::{on_generate, FormState, InputParseError, PointEntry, MAX_POINTS};
use lvprofile::metrics::profile::Sample;

fn form(rows: &[(&str, &str)]) -> FormState {
    FormState::with_entries(
        "Deadlift".to_string(),
        "2026-10-18".to_string(),
        rows.iter().map(|&(l, v)| PointEntry::new(l, v)).collect(),
    )
}

#[test]
fn test_samples_preserve_order_and_duplicates() {
    let samples = form(&[("100", "0.5"), ("100", "0.5"), ("50", "1.5")])
        .parse_samples()
        .unwrap();

    assert_eq!(
        samples,
        vec![
            Sample::new(100.0, 0.5),
            Sample::new(100.0, 0.5),
            Sample::new(50.0, 1.5),
        ]
    );
}

#[test]
fn test_scientific_and_negative_numbers_parse() {
    let samples = form(&[("1e2", "-0.25")]).parse_samples().unwrap();
    assert_eq!(samples, vec![Sample::new(100.0, -0.25)]);
}

#[test]
fn test_empty_field_is_parse_error() {
    let result = form(&[("100", "0.5"), ("", "1.0")]).parse_samples();
    assert_eq!(
        result,
        Err(InputParseError::Load {
            index: 1,
            text: String::new()
        })
    );
}

#[test]
fn test_nan_text_is_parse_error() {
    let result = form(&[("100", "NaN")]).parse_samples();
    assert!(matches!(result, Err(InputParseError::Velocity { index: 0, .. })));
}

#[test]
fn test_generate_zero_points() {
    let mut state = form(&[("100", "0.5")]);
    state.num_points = "0".to_string();

    let next = on_generate(&state).unwrap();
    assert!(next.entries().is_empty());
    assert_eq!(next.num_points, "0");
}

#[test]
fn test_generate_replaces_rows() {
    let mut state = form(&[("100", "0.5")]);
    state.num_points = "4".to_string();

    let next = on_generate(&state).unwrap();
    assert_eq!(next.entries().len(), 4);
    assert!(next.entries().iter().all(|e| *e == PointEntry::default()));
    // The original snapshot is untouched.
    assert_eq!(state.entries().len(), 1);
}

#[test]
fn test_generate_rejects_fractional_count() {
    let mut state = form(&[]);
    state.num_points = "2.5".to_string();

    assert_eq!(
        on_generate(&state),
        Err(InputParseError::PointCount("2.5".to_string()))
    );
}

#[test]
fn test_generate_rejects_oversized_count() {
    let mut state = form(&[("100", "0.5")]);
    state.num_points = "18446744073709551615".to_string();
    assert!(matches!(
        on_generate(&state),
        Err(InputParseError::TooManyPoints { max: MAX_POINTS, .. })
            | Err(InputParseError::PointCount(_))
    ));

    state.num_points = "1000000000".to_string();
    assert_eq!(
        on_generate(&state),
        Err(InputParseError::TooManyPoints {
            count: 1_000_000_000,
            max: MAX_POINTS
        })
    );

    state.num_points = MAX_POINTS.to_string();
    assert_eq!(on_generate(&state).unwrap().entries().len(), MAX_POINTS);
}

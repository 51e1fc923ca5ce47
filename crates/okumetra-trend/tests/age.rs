//! Age resolution: birth-date basis, stated-age back-projection, the
//! missing-basis precondition, and pre-birth exclusion.

use jiff::civil::date;

use okumetra_core::models::patient::{PatientMeta, Sex};
use okumetra_trend::age::resolve_ages;
use okumetra_trend::error::TrendError;

const TODAY: jiff::civil::Date = date(2025, 6, 1);

fn with_birth_date() -> PatientMeta {
    let mut meta = PatientMeta::new("test", Sex::Female);
    meta.birth_date = Some(date(2010, 1, 1));
    meta
}

/// Birth date 2010-01-01, measurement 2015-01-01: close to exactly five
/// years on the 365.25-day divisor.
#[test]
fn birth_date_basis_resolves_fractional_years() {
    let resolution = resolve_ages(&[date(2015, 1, 1)], &with_birth_date(), TODAY).unwrap();
    assert_eq!(resolution.excluded, 0);
    assert!((resolution.ages[0] - 5.0).abs() < 0.01);
}

/// With only a stated current age, measurement ages are back-projected
/// from today.
#[test]
fn stated_age_back_projects_from_today() {
    let mut meta = PatientMeta::new("test", Sex::Male);
    meta.current_age = Some(10.0);

    let resolution = resolve_ages(&[date(2024, 6, 1)], &meta, TODAY).unwrap();
    assert!((resolution.ages[0] - 9.0).abs() < 0.01);
}

/// The birth date wins when both bases are present.
#[test]
fn birth_date_takes_precedence_over_stated_age() {
    let mut meta = with_birth_date();
    meta.current_age = Some(40.0);

    let resolution = resolve_ages(&[date(2015, 1, 1)], &meta, TODAY).unwrap();
    assert!((resolution.ages[0] - 5.0).abs() < 0.01);
}

#[test]
fn missing_basis_is_a_precondition_failure() {
    let meta = PatientMeta::new("test", Sex::Male);
    let err = resolve_ages(&[date(2015, 1, 1)], &meta, TODAY).unwrap_err();
    assert!(matches!(err, TrendError::MissingAgeBasis));
}

/// A measurement dated before birth is replaced with NAN and counted, so
/// the fitter drops it and the caller can surface the exclusion.
#[test]
fn pre_birth_measurements_are_excluded() {
    let dates = [date(2009, 6, 1), date(2015, 1, 1)];
    let resolution = resolve_ages(&dates, &with_birth_date(), TODAY).unwrap();

    assert_eq!(resolution.excluded, 1);
    assert_eq!(resolution.ages.len(), 2);
    assert!(resolution.ages[0].is_nan());
    assert!(resolution.ages[1].is_finite());
}

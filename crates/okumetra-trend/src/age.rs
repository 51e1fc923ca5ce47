use jiff::civil;
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use okumetra_core::models::patient::{PatientMeta, years_between};

use crate::error::TrendError;

/// Ages resolved for a date sequence.
///
/// `ages` is parallel to the input dates. An entry whose resolved age is
/// negative (measurement dated before birth) is replaced with `NAN` so the
/// fitter's finite-filter drops it; `excluded` counts the replacements so
/// the caller can surface them.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AgeResolution {
    pub ages: Vec<f64>,
    pub excluded: usize,
}

/// Resolve measurement dates to fractional ages (365.25-day year).
///
/// The birth date is authoritative when present. Otherwise the stated
/// current age is back-projected relative to `today`:
/// `age = current_age - years(today - date)`. With neither basis, age
/// resolution fails and the caller must collect one before fitting.
pub fn resolve_ages(
    dates: &[civil::Date],
    meta: &PatientMeta,
    today: civil::Date,
) -> Result<AgeResolution, TrendError> {
    let raw: Vec<f64> = if let Some(dob) = meta.birth_date {
        dates.iter().map(|&d| years_between(dob, d)).collect()
    } else if let Some(current_age) = meta.current_age {
        dates
            .iter()
            .map(|&d| current_age - years_between(d, today))
            .collect()
    } else {
        return Err(TrendError::MissingAgeBasis);
    };

    let mut excluded = 0;
    let ages = raw
        .into_iter()
        .map(|age| {
            if age < 0.0 {
                excluded += 1;
                f64::NAN
            } else {
                age
            }
        })
        .collect();
    if excluded > 0 {
        warn!(excluded, "dropping measurements dated before birth");
    }
    Ok(AgeResolution { ages, excluded })
}

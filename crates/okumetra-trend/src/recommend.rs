use jiff::civil;
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use okumetra_core::models::patient::PatientMeta;
use okumetra_core::models::series::{Measured, Series};
use okumetra_core::remarks::Remark;

use crate::age::resolve_ages;
use crate::error::TrendError;
use crate::fit::{FitMode, TrendFit, fit_trend};

/// Progression-suppression factor for one treatment tag; smaller means
/// stronger suppression. Tags without a known effect pass through at 1.0.
fn efficacy_factor(remark: Remark) -> f64 {
    match remark {
        Remark::Atropine0125 => 0.70,
        Remark::LowDoseAtropine => 0.80,
        Remark::OkLens => 0.60,
        Remark::Dims => 0.65,
        Remark::Hal => 0.65,
        _ => 1.0,
    }
}

/// Combined factor for a point's remarks: the strongest suppression wins.
/// No remarks means no suppression (1.0).
pub fn adjustment_factor(remarks: &[Remark]) -> f64 {
    remarks
        .iter()
        .copied()
        .map(efficacy_factor)
        .fold(1.0, f64::min)
}

/// A treatment-adjusted projection with the chosen functional form.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Recommendation {
    /// The chosen fit, with `predicted` and `delta_to_target` already
    /// treatment-adjusted when the trend is still running.
    pub fit: TrendFit,
    /// `None` when neither functional form produced a valid fit.
    pub chosen_mode: Option<FitMode>,
    /// Applied treatment-efficacy factor (1.0 = no suppression). Reported
    /// even when the last observation is already past the target age.
    pub factor: f64,
}

/// Fit both functional forms, keep the better one, and damp the projected
/// progression by the treatment on the most recent visit.
///
/// Model selection: both valid → higher R² (ties keep linear); one valid →
/// that one; neither → an invalid recommendation with no chosen mode. The
/// adjustment reads the remarks of the last element of `remarks_per_point`
/// (most recent visit by input order) and scales the remaining delta to the
/// target age; past the target age there is no remaining delta and the
/// chosen fit's prediction passes through unadjusted.
pub fn recommend(
    ages: &[f64],
    values: &[f64],
    remarks_per_point: &[Vec<Remark>],
    target_age: f64,
) -> Recommendation {
    let linear = fit_trend(ages, values, target_age, FitMode::Linear);
    let log = fit_trend(ages, values, target_age, FitMode::Log);

    // NaN R² compares false, so an undefined-variance fit never displaces
    // the linear form.
    let choose_log = if log.valid && linear.valid {
        log.r_squared > linear.r_squared
    } else {
        log.valid
    };
    let mut fit = if choose_log { log } else { linear };

    if !fit.valid {
        return Recommendation {
            fit,
            chosen_mode: None,
            factor: 1.0,
        };
    }

    let last_remarks = remarks_per_point.last().map(Vec::as_slice).unwrap_or(&[]);
    let factor = adjustment_factor(last_remarks);

    if fit.last_age < target_age && fit.last_value.is_finite() {
        fit.delta_to_target *= factor;
        fit.predicted = fit.last_value + fit.delta_to_target;
    }

    let chosen_mode = Some(if choose_log {
        FitMode::Log
    } else {
        FitMode::Linear
    });
    debug!(
        mode = ?chosen_mode,
        factor,
        r_squared = fit.r_squared,
        "selected trend model"
    );
    Recommendation {
        fit,
        chosen_mode,
        factor,
    }
}

/// Run the recommender over one series column.
///
/// Resolves ages from `meta` (erroring when no age basis exists), projects
/// each record through `value`, and feeds the per-visit remarks through to
/// the treatment adjustment.
pub fn recommend_series<R: Measured>(
    series: &Series<R>,
    meta: &PatientMeta,
    today: civil::Date,
    target_age: f64,
    value: impl Fn(&R) -> f64,
) -> Result<Recommendation, TrendError> {
    let resolution = resolve_ages(&series.dates(), meta, today)?;
    let values = series.values(value);
    let remarks = series.remarks_per_point();
    Ok(recommend(&resolution.ages, &values, &remarks, target_age))
}

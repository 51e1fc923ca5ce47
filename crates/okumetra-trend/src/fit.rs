use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use okumetra_core::models::patient::PatientMeta;
use okumetra_core::models::series::{Measured, Series};

use crate::age::resolve_ages;
use crate::error::TrendError;

/// Default projection horizon: trends are read out at age 20.
pub const TARGET_AGE: f64 = 20.0;

/// Functional form of a fitted trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FitMode {
    /// `value = slope * age + intercept`
    Linear,
    /// `value = slope * ln(age) + intercept`
    Log,
}

/// Result of one regression fit over an age-indexed value series.
///
/// Soft failures (fewer than two usable points, zero age variance) come
/// back as a value with `valid == false` and every numeric field `NAN`;
/// callers branch on `valid`, never on a panic or error.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. `NAN` when the values have zero
    /// variance (the fit is exact but R² is undefined).
    pub r_squared: f64,
    pub last_age: f64,
    pub last_value: f64,
    /// Projected value at the target age.
    pub predicted: f64,
    /// `predicted - last_value` when the last observation is before the
    /// target age, otherwise `0.0`.
    pub delta_to_target: f64,
    pub valid: bool,
}

impl TrendFit {
    pub const INVALID: TrendFit = TrendFit {
        slope: f64::NAN,
        intercept: f64::NAN,
        r_squared: f64::NAN,
        last_age: f64::NAN,
        last_value: f64::NAN,
        predicted: f64::NAN,
        delta_to_target: f64::NAN,
        valid: false,
    };
}

/// Ordinary-least-squares line over `(age, value)` pairs, extrapolated to
/// `target_age`.
///
/// Pairs with a non-finite age or value are skipped; `Log` mode additionally
/// requires `age > 0` so the predictor `ln(age)` exists. The last observed
/// point is the last surviving pair in input order (input is date-sorted
/// upstream; no re-sorting happens here). Mismatched input lengths are a
/// degenerate fit, not a panic.
pub fn fit_trend(ages: &[f64], values: &[f64], target_age: f64, mode: FitMode) -> TrendFit {
    if ages.len() != values.len() {
        return TrendFit::INVALID;
    }

    let mut xs = Vec::with_capacity(ages.len());
    let mut ys = Vec::with_capacity(values.len());
    let mut last_age = f64::NAN;
    let mut last_value = f64::NAN;
    for (&age, &value) in ages.iter().zip(values) {
        let finite = age.is_finite() && value.is_finite();
        let keep = match mode {
            FitMode::Linear => finite,
            FitMode::Log => finite && age > 0.0,
        };
        if keep {
            xs.push(match mode {
                FitMode::Linear => age,
                FitMode::Log => age.ln(),
            });
            ys.push(value);
            last_age = age;
            last_value = value;
        }
    }
    if xs.len() < 2 {
        return TrendFit::INVALID;
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(&ys) {
        let dx = x - x_mean;
        sxx += dx * dx;
        sxy += dx * (y - y_mean);
    }
    if sxx == 0.0 {
        return TrendFit::INVALID;
    }
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !slope.is_finite() || !intercept.is_finite() {
        return TrendFit::INVALID;
    }

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&x, &y) in xs.iter().zip(&ys) {
        let residual = y - (slope * x + intercept);
        ss_res += residual * residual;
        let dy = y - y_mean;
        ss_tot += dy * dy;
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        f64::NAN
    };

    let x_target = match mode {
        FitMode::Linear => target_age,
        FitMode::Log => target_age.ln(),
    };
    let predicted = slope * x_target + intercept;
    let delta_to_target = if last_age < target_age {
        predicted - last_value
    } else {
        0.0
    };

    TrendFit {
        slope,
        intercept,
        r_squared,
        last_age,
        last_value,
        predicted,
        delta_to_target,
        valid: true,
    }
}

/// Fit one series column under a fixed functional form.
///
/// Resolves ages from `meta` (erroring when no age basis exists) and
/// projects each record through `value`.
pub fn fit_series<R: Measured>(
    series: &Series<R>,
    meta: &PatientMeta,
    today: civil::Date,
    target_age: f64,
    mode: FitMode,
    value: impl Fn(&R) -> f64,
) -> Result<TrendFit, TrendError> {
    let resolution = resolve_ages(&series.dates(), meta, today)?;
    let values = series.values(value);
    Ok(fit_trend(&resolution.ages, &values, target_age, mode))
}

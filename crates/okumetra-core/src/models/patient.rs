use std::str::FromStr;

use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Days per year used for all fractional-age arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Patient sex, as recorded for reference-curve selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(CoreError::InvalidSex(other.to_string())),
        }
    }
}

/// Identity and age basis for one patient.
///
/// At most one of `birth_date` / `current_age` is authoritative for age
/// computation; `birth_date` takes precedence when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientMeta {
    pub id: Uuid,
    pub name: String,
    pub sex: Sex,
    pub birth_date: Option<civil::Date>,
    /// Stated age in fractional years, used only when `birth_date` is absent.
    pub current_age: Option<f64>,
}

impl PatientMeta {
    pub fn new(name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sex,
            birth_date: None,
            current_age: None,
        }
    }

    /// Age in fractional years on `date`, when the birth date is known.
    pub fn age_on(&self, date: civil::Date) -> Option<f64> {
        self.birth_date.map(|dob| years_between(dob, date))
    }
}

/// Fractional years from `start` to `end`, on a 365.25-day year.
pub fn years_between(start: civil::Date, end: civil::Date) -> f64 {
    (end - start).get_days() as f64 / DAYS_PER_YEAR
}

use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::series::Measured;
use crate::remarks::Remark;

/// One manifest/cycloplegic refraction measurement.
///
/// The right eye is always present; the left eye may be absent when only one
/// side was measured. Spherical equivalents are derived once, at ingestion,
/// and stored — an eye with no sphere/cylinder pair has no SE.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RefractionRecord {
    pub date: civil::Date,
    pub od_sphere: f64,
    pub od_cylinder: f64,
    pub od_axis: f64,
    pub os_sphere: Option<f64>,
    pub os_cylinder: Option<f64>,
    pub os_axis: Option<f64>,
    pub od_se: f64,
    pub os_se: Option<f64>,
    pub remarks: Vec<Remark>,
}

impl Measured for RefractionRecord {
    fn date(&self) -> civil::Date {
        self.date
    }

    fn remarks(&self) -> &[Remark] {
        &self.remarks
    }
}

/// `sphere + cylinder/2`, the single-number refractive summary.
pub fn spherical_equivalent(sphere: f64, cylinder: f64) -> f64 {
    sphere + cylinder / 2.0
}

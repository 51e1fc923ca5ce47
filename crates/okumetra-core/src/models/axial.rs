use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::series::Measured;
use crate::remarks::Remark;

/// One axial length measurement, both eyes, in millimeters.
///
/// Biometers often print corneal curvature next to the axial readout, so a
/// keratometry block can ride along on the same visit; absent sub-values are
/// `None` and serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxialRecord {
    pub date: civil::Date,
    pub od_mm: f64,
    pub os_mm: f64,
    pub od_k1: Option<f64>,
    pub od_k2: Option<f64>,
    pub od_mean_k: Option<f64>,
    pub os_k1: Option<f64>,
    pub os_k2: Option<f64>,
    pub os_mean_k: Option<f64>,
    pub remarks: Vec<Remark>,
}

impl AxialRecord {
    /// A record with no embedded keratometry block.
    pub fn new(date: civil::Date, od_mm: f64, os_mm: f64, remarks: Vec<Remark>) -> Self {
        Self {
            date,
            od_mm,
            os_mm,
            od_k1: None,
            od_k2: None,
            od_mean_k: None,
            os_k1: None,
            os_k2: None,
            os_mean_k: None,
            remarks,
        }
    }
}

impl Measured for AxialRecord {
    fn date(&self) -> civil::Date {
        self.date
    }

    fn remarks(&self) -> &[Remark] {
        &self.remarks
    }
}

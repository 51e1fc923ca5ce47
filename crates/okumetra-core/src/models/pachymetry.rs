use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::series::Measured;
use crate::remarks::Remark;

/// One central corneal thickness measurement, both eyes, in micrometers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PachymetryRecord {
    pub date: civil::Date,
    pub od_um: f64,
    pub os_um: f64,
    pub remarks: Vec<Remark>,
}

impl PachymetryRecord {
    pub fn new(date: civil::Date, od_um: f64, os_um: f64, remarks: Vec<Remark>) -> Self {
        Self {
            date,
            od_um,
            os_um,
            remarks,
        }
    }
}

impl Measured for PachymetryRecord {
    fn date(&self) -> civil::Date {
        self.date
    }

    fn remarks(&self) -> &[Remark] {
        &self.remarks
    }
}

use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::series::Measured;
use crate::remarks::Remark;

/// One standalone keratometry measurement: steep/flat corneal power and
/// their mean, per eye, in diopters.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeratometryRecord {
    pub date: civil::Date,
    pub od_k1: f64,
    pub od_k2: f64,
    pub od_mean_k: f64,
    pub os_k1: f64,
    pub os_k2: f64,
    pub os_mean_k: f64,
    pub remarks: Vec<Remark>,
}

impl Measured for KeratometryRecord {
    fn date(&self) -> civil::Date {
        self.date
    }

    fn remarks(&self) -> &[Remark] {
        &self.remarks
    }
}

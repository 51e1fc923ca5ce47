use std::collections::BTreeMap;

use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::remarks::Remark;

/// Access to the fields every measurement category shares.
pub trait Measured {
    fn date(&self) -> civil::Date;
    fn remarks(&self) -> &[Remark];
}

/// A date-keyed measurement series.
///
/// Invariants: ascending date order, exactly one record per date. [`merge`]
/// maintains both; later-inserted records win on date collision.
///
/// [`merge`]: Series::merge
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Series<R> {
    records: Vec<R>,
}

impl<R: Measured> Series<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a series from an unordered batch, normalizing to the series
    /// invariants.
    pub fn from_records(batch: Vec<R>) -> Self {
        let mut series = Self::new();
        series.merge(batch);
        series
    }

    /// Append a batch, then restore ascending unique-date order. A batch
    /// record sharing a date with an existing record replaces it; within the
    /// batch, the later record wins.
    pub fn merge(&mut self, batch: Vec<R>) {
        let mut by_date: BTreeMap<civil::Date, R> = BTreeMap::new();
        for record in self.records.drain(..).chain(batch) {
            by_date.insert(record.date(), record);
        }
        self.records = by_date.into_values().collect();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> Vec<civil::Date> {
        self.records.iter().map(Measured::date).collect()
    }

    /// Project one numeric column out of the series, parallel to [`dates`].
    ///
    /// [`dates`]: Series::dates
    pub fn values(&self, project: impl Fn(&R) -> f64) -> Vec<f64> {
        self.records.iter().map(project).collect()
    }

    /// Per-record remark lists, parallel to [`dates`].
    ///
    /// [`dates`]: Series::dates
    pub fn remarks_per_point(&self) -> Vec<Vec<Remark>> {
        self.records.iter().map(|r| r.remarks().to_vec()).collect()
    }
}

//! Intake for externally-extracted measurement candidates.
//!
//! The extraction adapter (OCR over instrument printouts, out of scope
//! here) reduces an image to eye-tagged numeric candidates. These
//! constructors apply the same plausibility gates as manual entry before a
//! record is built, so a misread value never lands in a series.

use jiff::civil;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use okumetra_core::models::axial::AxialRecord;
use okumetra_core::models::kind::{AXIS_DEG, CYLINDER_D, MeasurementKind, SPHERE_D, ValueRange};
use okumetra_core::models::pachymetry::PachymetryRecord;
use okumetra_core::models::refraction::{RefractionRecord, spherical_equivalent};
use okumetra_core::remarks::Remark;

use crate::error::IngestError;

/// Eye-tagged value pair from the extraction adapter. Either side may be
/// missing when the source only shows one eye.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyePair {
    pub od: Option<f64>,
    pub os: Option<f64>,
}

impl EyePair {
    pub fn is_empty(&self) -> bool {
        self.od.is_none() && self.os.is_none()
    }
}

/// One eye's sphere/cylinder/axis candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeTriple {
    pub sphere: f64,
    pub cylinder: f64,
    pub axis: f64,
}

fn check_range(what: &'static str, range: ValueRange, value: f64) -> Result<(), IngestError> {
    if range.contains(value) {
        Ok(())
    } else {
        warn!(what, value, "rejecting out-of-range candidate");
        Err(IngestError::OutOfRange {
            what,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn check_scalar(kind: MeasurementKind, value: f64) -> Result<(), IngestError> {
    match kind.scalar_range() {
        Some(range) => check_range(kind.label(), range, value),
        None => Ok(()),
    }
}

/// Gate a candidate pair against its kind's plausible range, per present
/// eye. The caller shows the screened pair for confirmation (and fills a
/// missing side) before committing a record.
pub fn screen_pair(kind: MeasurementKind, pair: EyePair) -> Result<EyePair, IngestError> {
    for value in [pair.od, pair.os].into_iter().flatten() {
        check_scalar(kind, value)?;
    }
    Ok(pair)
}

/// Build an axial record from confirmed candidates. Both eyes are required
/// at record time; the entry surface fills a missing side before committing.
pub fn accept_axial_candidate(
    date: civil::Date,
    od_mm: f64,
    os_mm: f64,
    remarks: Vec<Remark>,
) -> Result<AxialRecord, IngestError> {
    check_scalar(MeasurementKind::AxialLength, od_mm)?;
    check_scalar(MeasurementKind::AxialLength, os_mm)?;
    Ok(AxialRecord::new(date, od_mm, os_mm, remarks))
}

/// Build a pachymetry record from confirmed candidates.
pub fn accept_pachymetry_candidate(
    date: civil::Date,
    od_um: f64,
    os_um: f64,
    remarks: Vec<Remark>,
) -> Result<PachymetryRecord, IngestError> {
    check_scalar(MeasurementKind::Pachymetry, od_um)?;
    check_scalar(MeasurementKind::Pachymetry, os_um)?;
    Ok(PachymetryRecord::new(date, od_um, os_um, remarks))
}

fn check_triple(triple: EyeTriple) -> Result<(), IngestError> {
    check_range("sphere", SPHERE_D, triple.sphere)?;
    check_range("cylinder", CYLINDER_D, triple.cylinder)?;
    check_range("axis", AXIS_DEG, triple.axis)?;
    Ok(())
}

/// Build a refraction record from confirmed candidates. Spherical
/// equivalents are derived here, at ingestion, for each eye present.
pub fn accept_refraction_candidate(
    date: civil::Date,
    od: EyeTriple,
    os: Option<EyeTriple>,
    remarks: Vec<Remark>,
) -> Result<RefractionRecord, IngestError> {
    check_triple(od)?;
    if let Some(triple) = os {
        check_triple(triple)?;
    }
    Ok(RefractionRecord {
        date,
        od_sphere: od.sphere,
        od_cylinder: od.cylinder,
        od_axis: od.axis,
        os_sphere: os.map(|t| t.sphere),
        os_cylinder: os.map(|t| t.cylinder),
        os_axis: os.map(|t| t.axis),
        od_se: spherical_equivalent(od.sphere, od.cylinder),
        os_se: os.map(|t| spherical_equivalent(t.sphere, t.cylinder)),
        remarks,
    })
}

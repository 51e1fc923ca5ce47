use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The four tracked measurement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasurementKind {
    AxialLength,
    Refraction,
    Keratometry,
    Pachymetry,
}

/// Inclusive plausibility bounds for a measured value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Axial length, millimeters.
pub const AXIAL_MM: ValueRange = ValueRange {
    min: 15.0,
    max: 35.0,
};

/// Corneal curvature power (K1/K2/mean K), diopters.
pub const KERATOMETRY_D: ValueRange = ValueRange {
    min: 30.0,
    max: 50.0,
};

/// Central corneal thickness, micrometers.
pub const PACHYMETRY_UM: ValueRange = ValueRange {
    min: 400.0,
    max: 700.0,
};

/// Refraction sphere, diopters.
pub const SPHERE_D: ValueRange = ValueRange {
    min: -30.0,
    max: 30.0,
};

/// Refraction cylinder, diopters.
pub const CYLINDER_D: ValueRange = ValueRange {
    min: -15.0,
    max: 15.0,
};

/// Cylinder axis, degrees.
pub const AXIS_DEG: ValueRange = ValueRange {
    min: 0.0,
    max: 180.0,
};

impl MeasurementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementKind::AxialLength => "axial length",
            MeasurementKind::Refraction => "refraction",
            MeasurementKind::Keratometry => "keratometry",
            MeasurementKind::Pachymetry => "pachymetry",
        }
    }

    /// Plausibility bounds for this kind's per-eye scalar (mm, D, µm).
    /// Refraction is bounded per component instead: [`SPHERE_D`],
    /// [`CYLINDER_D`], [`AXIS_DEG`].
    pub fn scalar_range(&self) -> Option<ValueRange> {
        match self {
            MeasurementKind::AxialLength => Some(AXIAL_MM),
            MeasurementKind::Keratometry => Some(KERATOMETRY_D),
            MeasurementKind::Pachymetry => Some(PACHYMETRY_UM),
            MeasurementKind::Refraction => None,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeasurementKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "axial_length" => Ok(MeasurementKind::AxialLength),
            "refraction" => Ok(MeasurementKind::Refraction),
            "keratometry" => Ok(MeasurementKind::Keratometry),
            "pachymetry" => Ok(MeasurementKind::Pachymetry),
            other => Err(CoreError::UnknownKind(other.to_string())),
        }
    }
}

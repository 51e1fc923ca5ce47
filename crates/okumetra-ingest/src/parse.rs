//! Newline/comma batch parsers for the four measurement categories.
//!
//! Hard failures (bad date, missing mandatory fields, unparseable mandatory
//! numbers) reject the whole batch and echo the offending line. Optional
//! fields degrade to absent without failing the line: an axial line whose
//! keratometry block doesn't parse keeps its mandatory values and treats the
//! tail as remarks text.

use jiff::civil;
use tracing::debug;

use okumetra_core::models::axial::AxialRecord;
use okumetra_core::models::keratometry::KeratometryRecord;
use okumetra_core::models::pachymetry::PachymetryRecord;
use okumetra_core::models::refraction::{RefractionRecord, spherical_equivalent};
use okumetra_core::remarks::{Remark, normalize_remarks};

use crate::date::parse_clinical_date;
use crate::error::IngestError;

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn parse_date(line: &str, raw: &str) -> Result<civil::Date, IngestError> {
    parse_clinical_date(raw).ok_or_else(|| IngestError::BadDate {
        line: line.to_string(),
    })
}

fn parse_number(line: &str, field: &'static str, raw: &str) -> Result<f64, IngestError> {
    raw.parse::<f64>().map_err(|_| IngestError::BadNumber {
        line: line.to_string(),
        field,
    })
}

fn tail_remarks(parts: &[&str]) -> Vec<Remark> {
    normalize_remarks(&parts.join(","))
}

/// Parse a run of optional numeric fields. Blank entries become absent; any
/// non-blank entry that fails to parse invalidates the whole block.
fn parse_optional_block<const N: usize>(parts: &[&str]) -> Option<[Option<f64>; N]> {
    let mut block = [None; N];
    for (slot, raw) in block.iter_mut().zip(parts) {
        if raw.is_empty() {
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) => *slot = Some(value),
            Err(_) => return None,
        }
    }
    Some(block)
}

/// Parse axial length lines:
/// `date, OD_mm, OS_mm[, OD_K1, OD_K2, OD_meanK, OS_K1, OS_K2, OS_meanK][, remarks]`.
pub fn parse_axial_lines(text: &str) -> Result<Vec<AxialRecord>, IngestError> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(line);
        if parts.len() < 3 {
            return Err(IngestError::TooFewFields {
                line: line.to_string(),
                expected: 3,
            });
        }
        let date = parse_date(line, parts[0])?;
        let od_mm = parse_number(line, "OD axial length", parts[1])?;
        let os_mm = parse_number(line, "OS axial length", parts[2])?;

        let mut kera: [Option<f64>; 6] = [None; 6];
        let mut tail = &parts[3..];
        if parts.len() >= 9
            && let Some(block) = parse_optional_block(&parts[3..9])
        {
            kera = block;
            tail = &parts[9..];
        }

        let [od_k1, od_k2, od_mean_k, os_k1, os_k2, os_mean_k] = kera;
        records.push(AxialRecord {
            date,
            od_mm,
            os_mm,
            od_k1,
            od_k2,
            od_mean_k,
            os_k1,
            os_k2,
            os_mean_k,
            remarks: tail_remarks(tail),
        });
    }
    debug!(count = records.len(), "parsed axial batch");
    Ok(records)
}

/// Parse refraction lines:
/// `date, OD_sph, OD_cyl, OD_axis[, OS_sph, OS_cyl, OS_axis][, remarks]`.
///
/// Spherical equivalents are computed here, per eye, and stored on the
/// record; an eye without a sphere/cylinder pair gets none.
pub fn parse_refraction_lines(text: &str) -> Result<Vec<RefractionRecord>, IngestError> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(line);
        if parts.len() < 4 {
            return Err(IngestError::TooFewFields {
                line: line.to_string(),
                expected: 4,
            });
        }
        let date = parse_date(line, parts[0])?;
        let od_sphere = parse_number(line, "OD sphere", parts[1])?;
        let od_cylinder = parse_number(line, "OD cylinder", parts[2])?;
        let od_axis = parse_number(line, "OD axis", parts[3])?;

        let (os_triple, tail) = if parts.len() >= 7 {
            let os_sphere = parse_number(line, "OS sphere", parts[4])?;
            let os_cylinder = parse_number(line, "OS cylinder", parts[5])?;
            let os_axis = parse_number(line, "OS axis", parts[6])?;
            (Some((os_sphere, os_cylinder, os_axis)), &parts[7..])
        } else {
            (None, &parts[4..])
        };

        records.push(RefractionRecord {
            date,
            od_sphere,
            od_cylinder,
            od_axis,
            os_sphere: os_triple.map(|(s, _, _)| s),
            os_cylinder: os_triple.map(|(_, c, _)| c),
            os_axis: os_triple.map(|(_, _, a)| a),
            od_se: spherical_equivalent(od_sphere, od_cylinder),
            os_se: os_triple.map(|(s, c, _)| spherical_equivalent(s, c)),
            remarks: tail_remarks(tail),
        });
    }
    debug!(count = records.len(), "parsed refraction batch");
    Ok(records)
}

/// Parse keratometry lines:
/// `date, OD_K1, OD_K2, OD_meanK, OS_K1, OS_K2, OS_meanK[, remarks]`.
pub fn parse_keratometry_lines(text: &str) -> Result<Vec<KeratometryRecord>, IngestError> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(line);
        if parts.len() < 7 {
            return Err(IngestError::TooFewFields {
                line: line.to_string(),
                expected: 7,
            });
        }
        let date = parse_date(line, parts[0])?;
        records.push(KeratometryRecord {
            date,
            od_k1: parse_number(line, "OD K1", parts[1])?,
            od_k2: parse_number(line, "OD K2", parts[2])?,
            od_mean_k: parse_number(line, "OD mean K", parts[3])?,
            os_k1: parse_number(line, "OS K1", parts[4])?,
            os_k2: parse_number(line, "OS K2", parts[5])?,
            os_mean_k: parse_number(line, "OS mean K", parts[6])?,
            remarks: tail_remarks(&parts[7..]),
        });
    }
    debug!(count = records.len(), "parsed keratometry batch");
    Ok(records)
}

/// Parse pachymetry lines: `date, OD_um, OS_um[, remarks]`.
pub fn parse_pachymetry_lines(text: &str) -> Result<Vec<PachymetryRecord>, IngestError> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(line);
        if parts.len() < 3 {
            return Err(IngestError::TooFewFields {
                line: line.to_string(),
                expected: 3,
            });
        }
        let date = parse_date(line, parts[0])?;
        let od_um = parse_number(line, "OD thickness", parts[1])?;
        let os_um = parse_number(line, "OS thickness", parts[2])?;
        records.push(PachymetryRecord::new(date, od_um, os_um, tail_remarks(&parts[3..])));
    }
    debug!(count = records.len(), "parsed pachymetry batch");
    Ok(records)
}

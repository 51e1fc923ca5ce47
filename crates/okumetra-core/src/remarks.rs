//! Canonical treatment/management vocabulary and the free-text normalizer.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical treatment/management tags.
///
/// Declaration order is the canonical ordering: normalized remark lists are
/// sorted by it, never by input order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Remark {
    #[serde(rename = "0.125% AT")]
    Atropine0125,
    #[serde(rename = "low-dose AT")]
    LowDoseAtropine,
    #[serde(rename = "OK-lens")]
    OkLens,
    #[serde(rename = "DIMS")]
    Dims,
    #[serde(rename = "HAL")]
    Hal,
    #[serde(rename = "MR")]
    ManifestRefraction,
    #[serde(rename = "CR")]
    CycloplegicRefraction,
}

impl Remark {
    /// Every tag, in canonical order.
    pub const ALL: [Remark; 7] = [
        Remark::Atropine0125,
        Remark::LowDoseAtropine,
        Remark::OkLens,
        Remark::Dims,
        Remark::Hal,
        Remark::ManifestRefraction,
        Remark::CycloplegicRefraction,
    ];

    /// The canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Remark::Atropine0125 => "0.125% AT",
            Remark::LowDoseAtropine => "low-dose AT",
            Remark::OkLens => "OK-lens",
            Remark::Dims => "DIMS",
            Remark::Hal => "HAL",
            Remark::ManifestRefraction => "MR",
            Remark::CycloplegicRefraction => "CR",
        }
    }

    /// Exact match against a canonical label.
    pub fn from_label(token: &str) -> Option<Remark> {
        Remark::ALL.into_iter().find(|r| r.label() == token)
    }

    /// Case-insensitive match against the synonym table.
    fn from_synonym(token: &str) -> Option<Remark> {
        match token.to_lowercase().as_str() {
            "mg" | "myo" | "uard" => Some(Remark::Atropine0125),
            "at" | "low-dose at" | "low dose at" | "atropine" | "ldat" => {
                Some(Remark::LowDoseAtropine)
            }
            "ok" | "ok lens" | "ortho-k" | "orthok" | "ok-lens" => Some(Remark::OkLens),
            "dims" => Some(Remark::Dims),
            "hal" => Some(Remark::Hal),
            "mr" | "manifest refraction" | "manifest" => Some(Remark::ManifestRefraction),
            "cr" | "cycloplegic refraction" | "cycloplegic" | "auto" => {
                Some(Remark::CycloplegicRefraction)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map free text to canonical tags.
///
/// Splits on comma/semicolon/slash, matches each token exactly against the
/// canonical labels and then case-insensitively against the synonym table.
/// Unmatched tokens are dropped. The result is deduplicated and in canonical
/// order, so the function is idempotent over its own display form.
pub fn normalize_remarks(raw: &str) -> Vec<Remark> {
    let mut tags = BTreeSet::new();
    for token in raw.split([',', ';', '/']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(tag) = Remark::from_label(token).or_else(|| Remark::from_synonym(token)) {
            tags.insert(tag);
        }
    }
    tags.into_iter().collect()
}

/// Render a remark list back to its `"; "`-joined display form.
pub fn remarks_to_label(remarks: &[Remark]) -> String {
    remarks
        .iter()
        .map(Remark::label)
        .collect::<Vec<_>>()
        .join("; ")
}

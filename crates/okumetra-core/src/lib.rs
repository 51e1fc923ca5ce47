//! okumetra-core
//!
//! Pure domain types and the shared measurement vocabulary: per-category
//! records, date-keyed series, patient metadata, and the canonical
//! treatment-tag normalizer. No I/O — this is the vocabulary the ingestion,
//! trend, and presentation layers speak.

pub mod error;
pub mod models;
pub mod remarks;

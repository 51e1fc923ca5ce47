//! okumetra-trend
//!
//! Age resolution, regression fitting, and treatment-adjusted projection
//! over okumetra-core measurement series. Everything here is a pure
//! function of its inputs: series in, validity-flagged results out.

pub mod age;
pub mod error;
pub mod fit;
pub mod recommend;

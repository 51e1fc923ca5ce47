use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unparseable date in line: `{line}`")]
    BadDate { line: String },

    #[error("too few fields (need at least {expected}) in line: `{line}`")]
    TooFewFields { line: String, expected: usize },

    #[error("unparseable {field} in line: `{line}`")]
    BadNumber { line: String, field: &'static str },

    #[error("{what} candidate {value} outside plausible range {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

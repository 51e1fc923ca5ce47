use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendError {
    /// Neither a birth date nor a stated current age is on file; ages cannot
    /// be resolved and no fitting may proceed.
    #[error("no age basis on file: provide a birth date or current age")]
    MissingAgeBasis,
}

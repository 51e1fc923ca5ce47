use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sex: {0}")]
    InvalidSex(String),

    #[error("unknown measurement kind: {0}")]
    UnknownKind(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row length mismatch in {relation}: expected {expected}, got {actual}")]
    RowLengthMismatch {
        relation: String,
        expected: usize,
        actual: usize,
    },
    #[error("unknown field kind: {value}")]
    UnknownFieldKind { value: String },
    #[error("relation {relation} has no column {column}")]
    UnknownColumn { relation: String, column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("fact {fact} requires dimension {dimension}, which was not built")]
    UnknownDimension { fact: String, dimension: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

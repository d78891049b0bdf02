use std::path::PathBuf;

use lifting_model::ModelError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("structure error: {message}")]
    Structure { message: String },

    #[error("integrity error in {relation}: {message}")]
    Integrity { relation: String, message: String },

    #[error("verification failed for {relation}: {message}")]
    Verification { relation: String, message: String },

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl WarehouseError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    pub(crate) fn integrity(relation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Integrity {
            relation: relation.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WarehouseError>;

//! Dimensional modeling for the lifting warehouse.
//!
//! The pipeline runs in strict sequence:
//!
//! 1. **Clean**: [`RecordCleaner`](lifting_transform::RecordCleaner) turns raw
//!    rows into typed, deduplicated clean rows
//! 2. **Dimensions**: [`build_dimensions`] assigns dense surrogate keys per
//!    distinct natural key and builds one [`KeyIndex`] per group
//! 3. **Facts**: [`build_facts`] resolves every required dimension through its
//!    index and keeps only fully resolved rows
//!
//! Persisting the result is left to the warehouse crate.

pub mod dimension;
pub mod error;
pub mod fact;
pub mod pipeline;

pub use dimension::{
    DimensionRow, DimensionTable, KeyIndex, SurrogateKey, build_dimension, build_dimensions,
    natural_key,
};
pub use error::{CoreError, Result};
pub use fact::{FactRow, FactTable, build_facts};
pub use pipeline::{PipelineContext, PipelineOutput, PipelineStats};

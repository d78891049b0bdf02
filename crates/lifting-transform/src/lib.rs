//! Cleaning stage of the lifting warehouse pipeline.
//!
//! - **normalization**: token-level cleaning of one raw value by column kind
//! - **cleaner**: column-name normalization, per-column dispatch, and
//!   exact-duplicate removal over a whole [`RawTable`](lifting_model::RawTable)

pub mod cleaner;
pub mod normalization;

pub use cleaner::{CleanOutput, CleanStats, RecordCleaner};
pub use normalization::{
    SENTINELS, extract_number, is_sentinel, normalize_field, normalize_year,
};

//! CLI library components for the lifting warehouse.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;

//! Pipeline context and stage orchestration.
//!
//! The [`PipelineContext`] bundles the warehouse schema (column kinds,
//! dimension groups, fact relation) so every stage sees the same
//! configuration. [`PipelineContext::run`] executes clean, dimension, and fact
//! stages in sequence over an in-memory table.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, info_span};

use lifting_model::{CleanTable, RawTable, WarehouseSchema};
use lifting_transform::{CleanStats, RecordCleaner};

use crate::dimension::{DimensionTable, build_dimensions};
use crate::error::Result;
use crate::fact::{FactTable, build_facts};

/// Diagnostics for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub clean: CleanStats,
    /// Entities per dimension.
    pub dimension_rows: BTreeMap<String, usize>,
    /// Clean rows excluded from each dimension for an incomplete natural key.
    pub incomplete_keys: BTreeMap<String, usize>,
    pub fact_rows: usize,
    pub dropped_fact_rows: usize,
}

/// Everything the pipeline produced, ready for the warehouse loader.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub clean: CleanTable,
    pub dimensions: Vec<DimensionTable>,
    pub fact: FactTable,
    pub stats: PipelineStats,
}

/// Centralized configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub schema: WarehouseSchema,
}

impl PipelineContext {
    pub fn new(schema: WarehouseSchema) -> Self {
        Self { schema }
    }

    pub fn cleaner(&self) -> RecordCleaner {
        RecordCleaner::new(self.schema.columns.clone())
    }

    /// Run clean -> dimensions -> facts.
    pub fn run(&self, raw: &RawTable) -> Result<PipelineOutput> {
        if let Some(source) = &raw.source {
            debug!(source = %source.display(), rows = raw.len(), "raw table received");
        }
        let clean_start = Instant::now();
        let clean_output = info_span!("clean", input_rows = raw.len())
            .in_scope(|| self.cleaner().clean(raw));
        info!(
            rows = clean_output.table.len(),
            duration_ms = clean_start.elapsed().as_millis(),
            "clean stage complete"
        );
        let clean = clean_output.table;

        let dimension_start = Instant::now();
        let dimensions = info_span!("dimensions", count = self.schema.dimensions.len())
            .in_scope(|| build_dimensions(&clean, &self.schema.dimensions));
        for dimension in &dimensions {
            info!(
                dimension = %dimension.name(),
                entities = dimension.len(),
                incomplete_rows = dimension.incomplete_rows,
                "dimension ready"
            );
        }
        info!(
            duration_ms = dimension_start.elapsed().as_millis(),
            "dimension stage complete"
        );

        let fact_start = Instant::now();
        let fact = info_span!("facts", fact = %self.schema.fact.name)
            .in_scope(|| build_facts(&clean, &self.schema.fact, &dimensions))?;
        info!(
            fact = %fact.spec.name,
            rows = fact.len(),
            dropped_rows = fact.dropped_rows,
            duration_ms = fact_start.elapsed().as_millis(),
            "fact stage complete"
        );

        let stats = PipelineStats {
            clean: clean_output.stats,
            dimension_rows: dimensions
                .iter()
                .map(|dim| (dim.name().to_string(), dim.len()))
                .collect(),
            incomplete_keys: dimensions
                .iter()
                .map(|dim| (dim.name().to_string(), dim.incomplete_rows))
                .collect(),
            fact_rows: fact.len(),
            dropped_fact_rows: fact.dropped_rows,
        };
        Ok(PipelineOutput {
            clean,
            dimensions,
            fact,
            stats,
        })
    }
}

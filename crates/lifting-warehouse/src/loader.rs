//! Validate, write, and verify a relation set against a sink.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{info, info_span};

use lifting_model::Relation;

use crate::error::{Result, WarehouseError};
use crate::sink::RelationSink;
use crate::validate::{validate_integrity, validate_structure};

/// Row counts per relation as reported by the sink after a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub row_counts: BTreeMap<String, usize>,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.row_counts.values().sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WarehouseLoader;

impl WarehouseLoader {
    pub fn new() -> Self {
        Self
    }

    /// Check a relation set without writing it.
    pub fn validate(&self, relations: &[Relation]) -> Result<()> {
        validate_structure(relations)?;
        validate_integrity(relations)
    }

    /// Validate, write in one transaction, then read back names and counts.
    pub fn load(&self, sink: &mut dyn RelationSink, relations: &[Relation]) -> Result<LoadReport> {
        let span = info_span!("load", relations = relations.len());
        let _guard = span.enter();
        let start = Instant::now();

        self.validate(relations)?;
        sink.write_all(relations)?;
        let report = verify(&*sink, relations)?;

        info!(
            relations = report.row_counts.len(),
            rows = report.total_rows(),
            duration_ms = start.elapsed().as_millis(),
            "warehouse load complete"
        );
        Ok(report)
    }
}

fn verify(sink: &dyn RelationSink, relations: &[Relation]) -> Result<LoadReport> {
    let names = sink.relation_names()?;
    let mut row_counts = BTreeMap::new();
    for relation in relations {
        if !names.iter().any(|name| name == &relation.name) {
            return Err(WarehouseError::Verification {
                relation: relation.name.clone(),
                message: "relation missing after write".to_string(),
            });
        }
        let stored = sink.row_count(&relation.name)?.unwrap_or_default();
        if stored != relation.row_count() {
            return Err(WarehouseError::Verification {
                relation: relation.name.clone(),
                message: format!("wrote {} rows, found {stored}", relation.row_count()),
            });
        }
        row_counts.insert(relation.name.clone(), stored);
    }
    Ok(LoadReport { row_counts })
}

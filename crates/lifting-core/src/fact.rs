//! Fact building: natural-key resolution against every dimension.

use std::collections::BTreeMap;

use tracing::debug;

use lifting_model::{CleanTable, FactSpec, Value};

use crate::dimension::{DimensionTable, SurrogateKey};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    /// Surrogate keys in [`FactSpec::dimensions`] order.
    pub keys: Vec<SurrogateKey>,
    /// Measures in [`FactSpec::measures`] order.
    pub measures: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct FactTable {
    pub spec: FactSpec,
    pub rows: Vec<FactRow>,
    /// Clean rows that failed to resolve at least one dimension.
    pub dropped_rows: usize,
    /// Per dimension, how many clean rows it failed to resolve.
    pub unresolved: BTreeMap<String, usize>,
}

impl FactTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve every clean row against the required dimensions.
///
/// Rows that fail any lookup are dropped (and counted), never reported as
/// errors. Output order follows the clean rows.
pub fn build_facts(
    table: &CleanTable,
    spec: &FactSpec,
    dimensions: &[DimensionTable],
) -> Result<FactTable> {
    let required: Vec<&DimensionTable> = spec
        .dimensions
        .iter()
        .map(|name| {
            dimensions
                .iter()
                .find(|dim| dim.name() == name.as_str())
                .ok_or_else(|| CoreError::UnknownDimension {
                    fact: spec.name.clone(),
                    dimension: name.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let mut unresolved: BTreeMap<String, usize> = spec
        .dimensions
        .iter()
        .map(|name| (name.clone(), 0))
        .collect();
    let mut rows = Vec::with_capacity(table.len());
    let mut dropped_rows = 0usize;

    for row in &table.rows {
        let mut keys = Vec::with_capacity(required.len());
        for dimension in &required {
            match dimension.resolve(row) {
                Some(key) => keys.push(key),
                None => {
                    *unresolved.entry(dimension.name().to_string()).or_default() += 1;
                }
            }
        }
        if keys.len() != required.len() {
            dropped_rows += 1;
            continue;
        }
        rows.push(FactRow {
            keys,
            measures: spec
                .measures
                .iter()
                .map(|column| row.get(column).clone())
                .collect(),
        });
    }

    debug!(
        fact = %spec.name,
        rows = rows.len(),
        dropped_rows,
        "fact rows resolved"
    );
    Ok(FactTable {
        spec: spec.clone(),
        rows,
        dropped_rows,
        unresolved,
    })
}

//! Dimension building and surrogate key assignment.
//!
//! Each dimension group is built independently from the clean rows:
//!
//! - rows whose natural key has a missing or blank part are skipped
//! - the first row seen per natural key supplies the descriptive attributes
//! - surrogate keys are `1..=N` in first-observation order
//!
//! The resulting [`KeyIndex`] is the only structure the fact builder needs,
//! so natural-key joins are hash lookups rather than table scans.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use lifting_model::{CleanRow, CleanTable, DimensionSpec, NaturalKey, Value};

pub type SurrogateKey = i64;

/// One dimension entity.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    pub key: SurrogateKey,
    pub natural_key: NaturalKey,
    /// Values in [`DimensionSpec::columns`] order.
    pub values: Vec<Value>,
}

/// Natural key to surrogate key lookup for one dimension group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyIndex {
    keys: HashMap<NaturalKey, SurrogateKey>,
}

impl KeyIndex {
    pub fn get(&self, key: &NaturalKey) -> Option<SurrogateKey> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DimensionTable {
    pub spec: DimensionSpec,
    pub rows: Vec<DimensionRow>,
    /// Clean rows skipped because their natural key was incomplete.
    pub incomplete_rows: usize,
    index: KeyIndex,
}

impl DimensionTable {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index(&self) -> &KeyIndex {
        &self.index
    }

    /// Surrogate key of the entity `row` belongs to, if any.
    pub fn resolve(&self, row: &CleanRow) -> Option<SurrogateKey> {
        natural_key(&self.spec, row).and_then(|key| self.index.get(&key))
    }
}

/// The natural key of `row` for `spec`; `None` when any part is missing.
pub fn natural_key(spec: &DimensionSpec, row: &CleanRow) -> Option<NaturalKey> {
    NaturalKey::from_values(spec.natural_key.iter().map(|column| row.get(column)))
}

pub fn build_dimension(table: &CleanTable, spec: &DimensionSpec) -> DimensionTable {
    for column in spec.columns() {
        if !table.has_column(column) {
            warn!(
                dimension = %spec.name,
                column,
                "dimension column not present in cleaned data"
            );
        }
    }

    let mut keys: HashMap<NaturalKey, SurrogateKey> = HashMap::new();
    let mut rows = Vec::new();
    let mut incomplete_rows = 0usize;

    for row in &table.rows {
        let Some(key) = natural_key(spec, row) else {
            incomplete_rows += 1;
            continue;
        };
        if let Entry::Vacant(slot) = keys.entry(key) {
            let surrogate = rows.len() as SurrogateKey + 1;
            rows.push(DimensionRow {
                key: surrogate,
                natural_key: slot.key().clone(),
                values: spec.columns().map(|column| row.get(column).clone()).collect(),
            });
            slot.insert(surrogate);
        }
    }

    debug!(
        dimension = %spec.name,
        entities = rows.len(),
        incomplete_rows,
        "dimension built"
    );
    DimensionTable {
        spec: spec.clone(),
        rows,
        incomplete_rows,
        index: KeyIndex { keys },
    }
}

/// Build every configured dimension; groups share no state.
pub fn build_dimensions(table: &CleanTable, specs: &[DimensionSpec]) -> Vec<DimensionTable> {
    specs
        .iter()
        .map(|spec| build_dimension(table, spec))
        .collect()
}

//! Row types for the ingest and cleaning stages.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::kind::FieldKind;
use crate::value::{RawValue, Value};

static MISSING: Value = Value::Missing;

/// One record as authored: column names keep their original case and spacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: Vec<(String, RawValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, handy for in-memory tables.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The raw dataset handed over by an ingest source.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    /// File the rows were read from, when known.
    pub source: Option<PathBuf>,
}

impl RawTable {
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        Self { rows, source: None }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Authored column names in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut columns = Vec::new();
        for row in &self.rows {
            for (name, _) in row.iter() {
                if seen.insert(name) {
                    columns.push(name);
                }
            }
        }
        columns
    }
}

/// A normalized column and the kind its values were cleaned as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanColumn {
    pub name: String,
    pub kind: FieldKind,
}

/// One cleaned record keyed by normalized column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanRow {
    values: BTreeMap<String, Value>,
}

impl CleanRow {
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Value of a column; absent columns read as [`Value::Missing`].
    pub fn get(&self, column: &str) -> &Value {
        self.values.get(column).unwrap_or(&MISSING)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_all_missing(&self) -> bool {
        self.values.values().all(Value::is_missing)
    }
}

impl FromIterator<(String, Value)> for CleanRow {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Cleaned dataset: normalized schema plus deduplicated rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanTable {
    pub columns: Vec<CleanColumn>,
    pub rows: Vec<CleanRow>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&CleanColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }
}

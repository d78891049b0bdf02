//! Warehouse layout configuration.
//!
//! A [`WarehouseSchema`] is usually deserialized from TOML:
//!
//! ```toml
//! [columns]
//! total_kg = "numeric_unit"
//! year = "year"
//!
//! [[dimensions]]
//! name = "athlete"
//! natural_key = ["name", "country"]
//! attributes = ["gender", "age"]
//!
//! [fact]
//! name = "lifting"
//! dimensions = ["athlete"]
//! measures = ["total_kg"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;
use crate::relation::RelationKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseSchema {
    /// Normalized column name to cleaning kind; unlisted columns are text.
    #[serde(default)]
    pub columns: BTreeMap<String, FieldKind>,
    pub dimensions: Vec<DimensionSpec>,
    pub fact: FactSpec,
}

impl WarehouseSchema {
    pub fn kind_of(&self, column: &str) -> FieldKind {
        self.columns.get(column).copied().unwrap_or_default()
    }

    pub fn dimension(&self, name: &str) -> Option<&DimensionSpec> {
        self.dimensions.iter().find(|dim| dim.name == name)
    }
}

/// One dimension group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    /// Attributes whose values together identify an entity, in key order.
    pub natural_key: Vec<String>,
    /// Descriptive attributes carried from the first row seen per key.
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl DimensionSpec {
    pub fn relation_name(&self) -> String {
        format!("{}{}", RelationKind::Dimension.prefix(), self.name)
    }

    /// Surrogate key column, shared by the dimension and the fact relation.
    pub fn key_column(&self) -> String {
        format!("id_{}", self.name)
    }

    /// Natural-key attributes followed by descriptive attributes.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.natural_key
            .iter()
            .chain(self.attributes.iter())
            .map(String::as_str)
    }
}

/// The fact relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSpec {
    pub name: String,
    /// Required dimension groups, in foreign-key column order.
    pub dimensions: Vec<String>,
    /// Columns copied verbatim from each cleaned row.
    #[serde(default)]
    pub measures: Vec<String>,
}

impl FactSpec {
    pub fn relation_name(&self) -> String {
        format!("{}{}", RelationKind::Fact.prefix(), self.name)
    }
}

//! Pre-write validation of a relation set.
//!
//! Both checks run before any sink is touched, so a rejected relation set
//! never reaches storage.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use lifting_model::{Relation, RelationKind, Value};

use crate::error::{Result, WarehouseError};

/// At least one fact relation and at least two dimension relations, each
/// named with its kind's prefix.
pub fn validate_structure(relations: &[Relation]) -> Result<()> {
    let mut seen = HashSet::new();
    for relation in relations {
        if !seen.insert(relation.name.as_str()) {
            return Err(WarehouseError::structure(format!(
                "relation {} appears more than once",
                relation.name
            )));
        }
        let prefix = relation.kind.prefix();
        if !relation.name.starts_with(prefix) {
            return Err(WarehouseError::structure(format!(
                "{} relation {} must be named {prefix}<name>",
                relation.kind, relation.name
            )));
        }
    }

    let facts = relations.iter().filter(|rel| rel.is_fact()).count();
    let dimensions = relations.iter().filter(|rel| rel.is_dimension()).count();
    if facts < 1 {
        return Err(WarehouseError::structure(
            "a star schema needs at least one fact relation",
        ));
    }
    if dimensions < 2 {
        return Err(WarehouseError::structure(format!(
            "a star schema needs at least two dimension relations, found {dimensions}"
        )));
    }
    debug!(facts, dimensions, "structure validated");
    Ok(())
}

/// Surrogate keys are unique and non-null, and every fact foreign key points
/// at an existing surrogate key.
pub fn validate_integrity(relations: &[Relation]) -> Result<()> {
    let mut keys: HashMap<&str, HashSet<i64>> = HashMap::new();
    for relation in relations.iter().filter(|rel| rel.is_dimension()) {
        let Some(primary_key) = relation.primary_key.as_deref() else {
            return Err(WarehouseError::integrity(
                &relation.name,
                "dimension relation has no surrogate key column",
            ));
        };
        let mut seen = HashSet::with_capacity(relation.row_count());
        for value in relation.column_values(primary_key)? {
            let Some(key) = value.as_i64() else {
                return Err(WarehouseError::integrity(
                    &relation.name,
                    format!("surrogate key {primary_key} holds non-integer value {value:?}"),
                ));
            };
            if !seen.insert(key) {
                return Err(WarehouseError::integrity(
                    &relation.name,
                    format!("surrogate key {primary_key} = {key} is duplicated"),
                ));
            }
        }
        keys.insert(relation.name.as_str(), seen);
    }

    for relation in relations.iter().filter(|rel| rel.kind == RelationKind::Fact) {
        for foreign_key in &relation.foreign_keys {
            let Some(targets) = keys.get(foreign_key.references.as_str()) else {
                return Err(WarehouseError::integrity(
                    &relation.name,
                    format!(
                        "{} references missing relation {}",
                        foreign_key.column, foreign_key.references
                    ),
                ));
            };
            for (row, value) in relation.column_values(&foreign_key.column)?.enumerate() {
                match value {
                    Value::Missing => {
                        return Err(WarehouseError::integrity(
                            &relation.name,
                            format!("row {row}: {} is null", foreign_key.column),
                        ));
                    }
                    Value::Integer(key) if targets.contains(key) => {}
                    other => {
                        return Err(WarehouseError::integrity(
                            &relation.name,
                            format!(
                                "row {row}: {} = {other} has no match in {}",
                                foreign_key.column, foreign_key.references
                            ),
                        ));
                    }
                }
            }
        }
        debug!(relation = %relation.name, rows = relation.row_count(), "foreign keys validated");
    }
    Ok(())
}

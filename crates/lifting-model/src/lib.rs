//! Data model for the lifting warehouse.
//!
//! Every pipeline stage has its own explicit row type:
//!
//! - [`RawRow`] / [`RawTable`]: authored column names and raw scalars
//! - [`CleanRow`] / [`CleanTable`]: normalized names and typed [`Value`]s
//! - [`Relation`]: the typed, named tables handed to a warehouse sink
//!
//! The [`WarehouseSchema`] describes column kinds, dimension groups, and the
//! fact relation.

pub mod error;
pub mod kind;
pub mod names;
pub mod relation;
pub mod row;
pub mod schema;
pub mod value;

pub use error::{ModelError, Result};
pub use kind::FieldKind;
pub use names::normalize_column_name;
pub use relation::{Field, FieldType, ForeignKey, Relation, RelationKind};
pub use row::{CleanColumn, CleanRow, CleanTable, RawRow, RawTable};
pub use schema::{DimensionSpec, FactSpec, WarehouseSchema};
pub use value::{KeyPart, NaturalKey, RawValue, Value, format_number};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_naming_follows_star_conventions() {
        let spec = DimensionSpec {
            name: "athlete".to_string(),
            natural_key: vec!["name".to_string(), "country".to_string()],
            attributes: vec!["gender".to_string()],
        };
        assert_eq!(spec.relation_name(), "dim_athlete");
        assert_eq!(spec.key_column(), "id_athlete");
        assert_eq!(
            spec.columns().collect::<Vec<_>>(),
            vec!["name", "country", "gender"]
        );
    }

    #[test]
    fn schema_kind_defaults_to_text() {
        let schema = WarehouseSchema {
            columns: [("total_kg".to_string(), FieldKind::NumericUnit)]
                .into_iter()
                .collect(),
            dimensions: vec![],
            fact: FactSpec {
                name: "lifting".to_string(),
                dimensions: vec![],
                measures: vec![],
            },
        };
        assert_eq!(schema.kind_of("total_kg"), FieldKind::NumericUnit);
        assert_eq!(schema.kind_of("coach"), FieldKind::Text);
        assert_eq!(schema.fact.relation_name(), "fact_lifting");
    }
}

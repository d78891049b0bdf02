//! Conversion of pipeline output into named, typed relations.

use lifting_core::{DimensionTable, FactTable, PipelineOutput};
use lifting_model::{CleanTable, Field, FieldKind, FieldType, Relation, RelationKind, Value};

use crate::error::Result;

/// Dimension relations in configuration order, then the fact relation.
pub fn build_relations(output: &PipelineOutput) -> Result<Vec<Relation>> {
    let mut relations = Vec::with_capacity(output.dimensions.len() + 1);
    for dimension in &output.dimensions {
        relations.push(dimension_relation(dimension, &output.clean)?);
    }
    relations.push(fact_relation(&output.fact, &output.dimensions, &output.clean)?);
    Ok(relations)
}

fn column_type(clean: &CleanTable, column: &str) -> FieldType {
    clean
        .column(column)
        .map_or(FieldKind::Text, |column| column.kind)
        .field_type()
}

pub fn dimension_relation(dimension: &DimensionTable, clean: &CleanTable) -> Result<Relation> {
    let key_column = dimension.spec.key_column();
    let mut fields = vec![Field::new(key_column.clone(), FieldType::Integer).not_null()];
    fields.extend(
        dimension
            .spec
            .columns()
            .map(|column| Field::new(column, column_type(clean, column))),
    );

    let mut relation = Relation::new(
        dimension.spec.relation_name(),
        RelationKind::Dimension,
        fields,
    )
    .with_primary_key(key_column);
    for row in &dimension.rows {
        let mut values = Vec::with_capacity(row.values.len() + 1);
        values.push(Value::Integer(row.key));
        values.extend(row.values.iter().cloned());
        relation.push_row(values)?;
    }
    Ok(relation)
}

/// The fact relation: one non-null foreign key per required dimension, then
/// the measures.
pub fn fact_relation(
    fact: &FactTable,
    dimensions: &[DimensionTable],
    clean: &CleanTable,
) -> Result<Relation> {
    let mut fields = Vec::with_capacity(fact.spec.dimensions.len() + fact.spec.measures.len());
    let mut foreign_keys = Vec::with_capacity(fact.spec.dimensions.len());
    for name in &fact.spec.dimensions {
        let target = dimensions.iter().find(|dim| dim.name() == name.as_str());
        let (relation_name, key_column) = match target {
            Some(dimension) => (dimension.spec.relation_name(), dimension.spec.key_column()),
            None => (
                format!("{}{name}", RelationKind::Dimension.prefix()),
                format!("id_{name}"),
            ),
        };
        fields.push(Field::new(key_column.clone(), FieldType::Integer).not_null());
        foreign_keys.push((key_column, relation_name));
    }
    fields.extend(
        fact.spec
            .measures
            .iter()
            .map(|column| Field::new(column.as_str(), column_type(clean, column))),
    );

    let mut relation = Relation::new(fact.spec.relation_name(), RelationKind::Fact, fields);
    for (column, references) in foreign_keys {
        relation = relation.with_foreign_key(column.clone(), references, column);
    }
    for row in &fact.rows {
        let values = row
            .keys
            .iter()
            .map(|key| Value::Integer(*key))
            .chain(row.measures.iter().cloned())
            .collect();
        relation.push_row(values)?;
    }
    Ok(relation)
}

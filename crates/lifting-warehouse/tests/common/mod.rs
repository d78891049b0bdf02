#![allow(dead_code)]

use lifting_core::PipelineContext;
use lifting_model::{RawRow, RawTable, Relation, WarehouseSchema};
use lifting_warehouse::build_relations;

pub const SCHEMA: &str = r#"
[columns]
gender = "categorical"
year = "year"
total_kg = "numeric_unit"

[[dimensions]]
name = "athlete"
natural_key = ["name", "country"]
attributes = ["gender"]

[[dimensions]]
name = "competition"
natural_key = ["competition", "year"]

[fact]
name = "lifting"
dimensions = ["athlete", "competition"]
measures = ["total_kg"]
"#;

pub fn schema() -> WarehouseSchema {
    lifting_config::parse_schema(SCHEMA).expect("parse schema")
}

fn lifter(name: &str, country: &str, competition: &str, year: i64, total: &str) -> RawRow {
    RawRow::new()
        .with("Name", name)
        .with("Country", country)
        .with("Gender", "M")
        .with("Competition", competition)
        .with("Year", year)
        .with("Total Kg", total)
}

pub fn raw_table() -> RawTable {
    RawTable::from_rows(vec![
        lifter("John Doe", "USA", "Nationals", 2020, "230kg"),
        lifter("Jane Smith", "Canada", "Nationals", 2020, "200"),
        lifter("John Doe", "USA", "Worlds", 2021, "240kg"),
        lifter("?", "USA", "Worlds", 2021, "180"),
    ])
}

/// dim_athlete (2 rows), dim_competition (2 rows), fact_lifting (3 rows).
pub fn relations() -> Vec<Relation> {
    let output = PipelineContext::new(schema())
        .run(&raw_table())
        .expect("pipeline run");
    build_relations(&output).expect("build relations")
}

pub fn relation<'a>(relations: &'a [Relation], name: &str) -> &'a Relation {
    relations
        .iter()
        .find(|relation| relation.name == name)
        .expect("relation present")
}

//! End-to-end tests for the pipeline context.

mod common;

use lifting_core::PipelineContext;
use lifting_model::{RawRow, RawTable, Value};
use proptest::prelude::*;

use common::lifting_schema;

fn lifter(name: &str, country: &str, total: &str) -> RawRow {
    RawRow::new()
        .with("Name", name)
        .with("Country", country)
        .with("Gender", "M")
        .with("Age", "25")
        .with("Competition", "Nationals")
        .with("Year", 2020)
        .with("Category", "M")
        .with("Team", "Team A")
        .with("Coach", "Coach 1")
        .with("Snatch Kg", "100kg")
        .with("Total Kg", total)
}

#[test]
fn end_to_end_collapses_duplicates_and_drops_unresolvable_rows() {
    let raw = RawTable::from_rows(vec![
        lifter("John Doe", "USA", "230kg"),
        lifter("John Doe", "USA", "230kg"),
        RawRow::new().with("Name", "?").with("Country", ""),
    ]);

    let output = PipelineContext::new(lifting_schema()).run(&raw).unwrap();

    assert_eq!(output.clean.len(), 2);
    assert_eq!(output.stats.clean.duplicate_rows, 1);
    assert!(output.clean.rows[1].is_all_missing());

    let athlete = &output.dimensions[0];
    assert_eq!(athlete.len(), 1);
    assert_eq!(athlete.rows[0].key, 1);
    assert_eq!(output.stats.incomplete_keys["athlete"], 1);

    assert_eq!(output.fact.len(), 1);
    assert_eq!(output.fact.rows[0].keys, vec![1, 1, 1]);
    assert_eq!(output.fact.rows[0].measures[0], Value::Number(100.0));
    assert_eq!(output.fact.rows[0].measures[2], Value::Number(230.0));
    assert_eq!(output.stats.dropped_fact_rows, 1);
}

#[test]
fn out_of_range_year_leaves_competition_unresolved() {
    let raw = RawTable::from_rows(vec![
        lifter("John Doe", "USA", "230kg"),
        lifter("Jane Smith", "Canada", "200kg").with("Year", 1800),
    ]);

    let output = PipelineContext::new(lifting_schema()).run(&raw).unwrap();

    // The later "Year" field wins, so Jane's year is out of range.
    assert_eq!(output.clean.rows[1].get("year"), &Value::Missing);
    assert_eq!(output.dimensions[0].len(), 2);
    assert_eq!(output.dimensions[1].len(), 1);
    assert_eq!(output.fact.len(), 1);
    assert_eq!(output.fact.unresolved["competition"], 1);
}

#[test]
fn running_twice_is_idempotent() {
    let raw = RawTable::from_rows(vec![
        lifter("John Doe", "USA", "230kg"),
        lifter("Jane Smith", "Canada", "200kg"),
        lifter("Bob Wilson", "Mexico", "?"),
    ]);
    let context = PipelineContext::new(lifting_schema());

    let first = context.run(&raw).unwrap();
    let second = context.run(&raw).unwrap();

    assert_eq!(first.clean, second.clean);
    assert_eq!(first.stats, second.stats);
    for (left, right) in first.dimensions.iter().zip(&second.dimensions) {
        assert_eq!(left.rows, right.rows);
    }
    assert_eq!(first.fact.rows, second.fact.rows);
}

proptest! {
    #[test]
    fn surrogate_keys_are_dense(names in prop::collection::vec("[b-e]{1,2}", 1..40)) {
        let raw = RawTable::from_rows(
            names
                .iter()
                .map(|name| lifter(name, "USA", "100"))
                .collect(),
        );
        let output = PipelineContext::new(lifting_schema()).run(&raw).unwrap();

        let distinct: std::collections::BTreeSet<&String> = names.iter().collect();
        let athlete = &output.dimensions[0];
        prop_assert_eq!(athlete.len(), distinct.len());
        let keys: Vec<i64> = athlete.rows.iter().map(|row| row.key).collect();
        let expected: Vec<i64> = (1..=distinct.len() as i64).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(output.fact.len(), output.clean.len());
    }
}

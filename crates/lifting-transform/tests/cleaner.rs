//! Tests for the record cleaner.

use std::collections::BTreeMap;

use lifting_model::{FieldKind, RawRow, RawTable, RawValue, Value};
use lifting_transform::RecordCleaner;

fn kinds() -> BTreeMap<String, FieldKind> {
    [
        ("age", FieldKind::NumericUnit),
        ("total_kg", FieldKind::NumericUnit),
        ("snatch_kg", FieldKind::NumericUnit),
        ("year", FieldKind::Year),
        ("country", FieldKind::Categorical),
    ]
    .into_iter()
    .map(|(name, kind)| (name.to_string(), kind))
    .collect()
}

fn sample_raw_data() -> RawTable {
    let rows = [
        ("John Doe", "USA", "25", "200kg", RawValue::Integer(2020), "100kg"),
        ("Jane Smith", "Canada", "30", "250", RawValue::Integer(2021), "120"),
        ("  BOB WILSON  ", "Mexico", "?", "300kg", RawValue::from("?"), "150kg"),
        ("?", "Unknown", "35", "?", RawValue::Integer(2022), "?"),
        ("N/A", "", "40", "", RawValue::Integer(2023), ""),
    ];
    RawTable::from_rows(
        rows.into_iter()
            .map(|(name, country, age, total, year, snatch)| {
                RawRow::new()
                    .with("Name", name)
                    .with("Country", country)
                    .with("Age", age)
                    .with("Total Kg", total)
                    .with("Year", year)
                    .with("Snatch Kg", snatch)
            })
            .collect(),
    )
}

#[test]
fn test_column_name_normalization() {
    let output = RecordCleaner::new(kinds()).clean(&sample_raw_data());
    let names: Vec<&str> = output.table.column_names().collect();
    assert_eq!(
        names,
        vec!["name", "country", "age", "total_kg", "year", "snatch_kg"]
    );
    assert!(!output.table.has_column("Total Kg"));
    assert_eq!(
        output.table.column("total_kg").map(|c| c.kind),
        Some(FieldKind::NumericUnit)
    );
}

#[test]
fn test_remove_duplicates() {
    let mut raw = sample_raw_data();
    raw.rows.push(raw.rows[0].clone());

    let output = RecordCleaner::new(kinds()).clean(&raw);

    assert_eq!(output.table.len(), 5);
    assert_eq!(output.stats.duplicate_rows, 1);
    assert_eq!(output.stats.input_rows, 6);
    assert_eq!(output.table.rows[0].get("name"), &Value::text("John Doe"));
}

#[test]
fn test_invalid_values_replacement() {
    let output = RecordCleaner::new(kinds()).clean(&sample_raw_data());
    let rows = &output.table.rows;

    assert_eq!(rows[3].get("name"), &Value::Missing);
    assert_eq!(rows[3].get("country"), &Value::Missing);
    assert_eq!(rows[4].get("name"), &Value::Missing);
    assert_eq!(rows[4].get("country"), &Value::Missing);
    assert_eq!(rows[2].get("name"), &Value::text("BOB WILSON"));
    assert_eq!(rows[2].get("age"), &Value::Missing);
    assert_eq!(rows[2].get("year"), &Value::Missing);
}

#[test]
fn test_numeric_columns_hold_numbers_only() {
    let output = RecordCleaner::new(kinds()).clean(&sample_raw_data());
    for row in &output.table.rows {
        for column in ["age", "total_kg", "snatch_kg"] {
            let value = row.get(column);
            assert!(
                matches!(value, Value::Number(_) | Value::Missing),
                "{column} held {value:?}"
            );
        }
        assert!(matches!(row.get("year"), Value::Integer(_) | Value::Missing));
    }
    assert_eq!(output.table.rows[0].get("total_kg"), &Value::Number(200.0));
    assert_eq!(output.table.rows[1].get("snatch_kg"), &Value::Number(120.0));
}

#[test]
fn malformed_values_degrade_without_dropping_the_row() {
    let raw = RawTable::from_rows(vec![
        RawRow::new()
            .with("Name", "Ann")
            .with("Total Kg", "heavy")
            .with("Year", 1800),
    ]);
    let output = RecordCleaner::new(kinds()).clean(&raw);

    assert_eq!(output.table.len(), 1);
    assert_eq!(output.stats.degraded_fields, 2);
    let row = &output.table.rows[0];
    assert_eq!(row.get("name"), &Value::text("Ann"));
    assert_eq!(row.get("total_kg"), &Value::Missing);
    assert_eq!(row.get("year"), &Value::Missing);
}

#[test]
fn rows_missing_a_column_read_as_missing() {
    let raw = RawTable::from_rows(vec![
        RawRow::new().with("Name", "Ann").with("Coach", "Lee"),
        RawRow::new().with("Name", "Bea"),
    ]);
    let output = RecordCleaner::new(BTreeMap::new()).clean(&raw);

    assert_eq!(output.table.rows[1].get("coach"), &Value::Missing);
    assert_eq!(output.table.rows[1].get("not_a_column"), &Value::Missing);
}

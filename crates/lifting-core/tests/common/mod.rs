//! Shared fixtures for lifting-core integration tests.

#![allow(dead_code)]

use lifting_model::{
    CleanColumn, CleanRow, CleanTable, DimensionSpec, FactSpec, FieldKind, Value, WarehouseSchema,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

pub fn lifting_schema() -> WarehouseSchema {
    WarehouseSchema {
        columns: [
            ("age", FieldKind::NumericUnit),
            ("year", FieldKind::Year),
            ("snatch_kg", FieldKind::NumericUnit),
            ("clean_and_jerk_kg", FieldKind::NumericUnit),
            ("total_kg", FieldKind::NumericUnit),
            ("body_weight_kg", FieldKind::NumericUnit),
            ("gender", FieldKind::Categorical),
            ("category", FieldKind::Categorical),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect(),
        dimensions: vec![
            DimensionSpec {
                name: "athlete".to_string(),
                natural_key: strings(&["name", "country"]),
                attributes: strings(&["athlete_id", "gender", "age"]),
            },
            DimensionSpec {
                name: "competition".to_string(),
                natural_key: strings(&["competition", "year", "category"]),
                attributes: vec![],
            },
            DimensionSpec {
                name: "team".to_string(),
                natural_key: strings(&["team", "coach"]),
                attributes: vec![],
            },
        ],
        fact: FactSpec {
            name: "lifting".to_string(),
            dimensions: strings(&["athlete", "competition", "team"]),
            measures: strings(&["snatch_kg", "clean_and_jerk_kg", "total_kg", "body_weight_kg"]),
        },
    }
}

const COLUMNS: [&str; 14] = [
    "athlete_id",
    "name",
    "gender",
    "age",
    "country",
    "competition",
    "year",
    "category",
    "team",
    "coach",
    "snatch_kg",
    "clean_and_jerk_kg",
    "total_kg",
    "body_weight_kg",
];

fn text_or_missing(value: &str) -> Value {
    if value.is_empty() {
        Value::Missing
    } else {
        Value::text(value)
    }
}

/// The cleaned sample used by the dimensional model tests.
pub fn sample_clean_data() -> CleanTable {
    let records: [(&str, &str, &str, f64, &str, &str, i64, &str, &str, &str, [f64; 4]); 5] = [
        ("ath_1", "John Doe", "M", 25.0, "USA", "Comp1", 2020, "M", "Team A", "Coach 1", [100.0, 130.0, 230.0, 80.0]),
        ("ath_2", "Jane Smith", "F", 30.0, "Canada", "Comp1", 2020, "F", "Team B", "Coach 2", [120.0, 150.0, 270.0, 70.0]),
        ("ath_1", "John Doe", "M", 25.0, "USA", "Comp2", 2021, "M", "Team A", "Coach 1", [105.0, 135.0, 240.0, 82.0]),
        ("ath_3", "Bob Wilson", "M", 35.0, "Mexico", "Comp1", 2020, "M", "Team C", "Coach 3", [110.0, 140.0, 250.0, 85.0]),
        ("", "Alice Brown", "F", 28.0, "USA", "Comp2", 2021, "F", "Team A", "Coach 1", [115.0, 145.0, 260.0, 75.0]),
    ];
    let schema = lifting_schema();
    let columns = COLUMNS
        .iter()
        .map(|name| CleanColumn {
            name: name.to_string(),
            kind: schema.kind_of(name),
        })
        .collect();
    let rows = records
        .iter()
        .map(
            |(id, name, gender, age, country, comp, year, category, team, coach, measures)| {
                let values = [
                    text_or_missing(id),
                    text_or_missing(name),
                    text_or_missing(gender),
                    Value::Number(*age),
                    text_or_missing(country),
                    text_or_missing(comp),
                    Value::Integer(*year),
                    text_or_missing(category),
                    text_or_missing(team),
                    text_or_missing(coach),
                    Value::Number(measures[0]),
                    Value::Number(measures[1]),
                    Value::Number(measures[2]),
                    Value::Number(measures[3]),
                ];
                COLUMNS
                    .iter()
                    .map(ToString::to_string)
                    .zip(values)
                    .collect::<CleanRow>()
            },
        )
        .collect();
    CleanTable { columns, rows }
}

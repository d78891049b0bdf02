//! Tests for dimension building.

mod common;

use std::collections::BTreeSet;

use lifting_core::{build_dimension, build_dimensions, natural_key};
use lifting_model::{CleanRow, Value};

use common::{lifting_schema, sample_clean_data};

#[test]
fn test_dim_athlete_creation() {
    let schema = lifting_schema();
    let athlete = build_dimension(&sample_clean_data(), schema.dimension("athlete").unwrap());

    // (John Doe, USA) appears twice.
    assert_eq!(athlete.len(), 4);
    let keys: Vec<_> = athlete.rows.iter().map(|row| row.key).collect();
    assert_eq!(keys, vec![1, 2, 3, 4]);

    let distinct: BTreeSet<_> = athlete.rows.iter().map(|row| &row.natural_key).collect();
    assert_eq!(distinct.len(), athlete.len());

    let john = &athlete.rows[0];
    assert_eq!(john.natural_key.to_string(), "John Doe|USA");
    assert_eq!(
        john.values,
        vec![
            Value::text("John Doe"),
            Value::text("USA"),
            Value::text("ath_1"),
            Value::text("M"),
            Value::Number(25.0),
        ]
    );
    // Alice keeps her missing athlete_id as a descriptive attribute.
    assert_eq!(athlete.rows[3].values[2], Value::Missing);
}

#[test]
fn test_dim_competition_creation() {
    let schema = lifting_schema();
    let competition = build_dimension(
        &sample_clean_data(),
        schema.dimension("competition").unwrap(),
    );

    let keys: Vec<String> = competition
        .rows
        .iter()
        .map(|row| row.natural_key.to_string())
        .collect();
    assert_eq!(
        keys,
        vec!["Comp1|2020|M", "Comp1|2020|F", "Comp2|2021|M", "Comp2|2021|F"]
    );
    assert_eq!(competition.incomplete_rows, 0);
}

#[test]
fn test_dim_team_creation() {
    let schema = lifting_schema();
    let team = build_dimension(&sample_clean_data(), schema.dimension("team").unwrap());

    assert_eq!(team.len(), 3);
    assert_eq!(team.rows[0].natural_key.to_string(), "Team A|Coach 1");
    assert_eq!(team.index().len(), 3);
}

#[test]
fn incomplete_natural_keys_are_excluded() {
    let schema = lifting_schema();
    let mut table = sample_clean_data();
    let mut row: Vec<(String, Value)> = table.rows[1]
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    for (name, value) in &mut row {
        if name.as_str() == "year" {
            *value = Value::Missing;
        }
    }
    table.rows.push(row.into_iter().collect::<CleanRow>());

    let dimensions = build_dimensions(&table, &schema.dimensions);
    let competition = &dimensions[1];

    assert_eq!(competition.incomplete_rows, 1);
    assert_eq!(competition.len(), 4);
    assert!(natural_key(&competition.spec, table.rows.last().unwrap()).is_none());
    // The same row still resolves its athlete and team.
    assert_eq!(dimensions[0].resolve(table.rows.last().unwrap()), Some(2));
    assert_eq!(dimensions[2].resolve(table.rows.last().unwrap()), Some(2));
}

#[test]
fn keys_are_dense_and_match_the_index() {
    let schema = lifting_schema();
    for dimension in build_dimensions(&sample_clean_data(), &schema.dimensions) {
        let expected: Vec<i64> = (1..=dimension.len() as i64).collect();
        let keys: Vec<i64> = dimension.rows.iter().map(|row| row.key).collect();
        assert_eq!(keys, expected, "{}", dimension.name());
        for row in &dimension.rows {
            assert_eq!(dimension.index().get(&row.natural_key), Some(row.key));
        }
    }
}

//! Tests for field normalization.

use lifting_model::{FieldKind, RawValue, Value};
use lifting_transform::{SENTINELS, normalize_field};
use proptest::prelude::*;

fn text(value: &str, kind: FieldKind) -> Value {
    normalize_field(&RawValue::from(value), kind)
}

#[test]
fn sentinels_become_missing_for_every_kind() {
    let kinds = [
        FieldKind::Text,
        FieldKind::NumericUnit,
        FieldKind::Year,
        FieldKind::Categorical,
    ];
    for sentinel in SENTINELS {
        for variant in [
            sentinel.to_string(),
            sentinel.to_uppercase(),
            format!("  {sentinel} "),
        ] {
            for kind in kinds {
                assert_eq!(
                    text(&variant, kind),
                    Value::Missing,
                    "{variant:?} as {kind} should be missing"
                );
            }
        }
    }
    assert_eq!(text("Unknown", FieldKind::Text), Value::Missing);
    assert_eq!(text("N/A", FieldKind::Categorical), Value::Missing);
    assert_eq!(
        normalize_field(&RawValue::Integer(-1), FieldKind::Text),
        Value::Missing
    );
}

#[test]
fn free_text_is_trimmed() {
    assert_eq!(
        text("  BOB WILSON  ", FieldKind::Text),
        Value::text("BOB WILSON")
    );
    assert_eq!(
        normalize_field(&RawValue::Integer(25), FieldKind::Text),
        Value::text("25")
    );
}

#[test]
fn numeric_extraction() {
    assert_eq!(text("100kg", FieldKind::NumericUnit), Value::Number(100.0));
    assert_eq!(text("200", FieldKind::NumericUnit), Value::Number(200.0));
    assert_eq!(text("150kg", FieldKind::NumericUnit), Value::Number(150.0));
    assert_eq!(text("?", FieldKind::NumericUnit), Value::Missing);
    assert_eq!(text("", FieldKind::NumericUnit), Value::Missing);
    assert_eq!(text("heavy", FieldKind::NumericUnit), Value::Missing);
}

#[test]
fn year_bounding() {
    let cases = [
        (RawValue::Integer(2020), Value::Integer(2020)),
        (RawValue::Integer(1800), Value::Missing),
        (RawValue::Integer(2030), Value::Missing),
        (RawValue::Integer(2021), Value::Integer(2021)),
        (RawValue::Integer(1900), Value::Integer(1900)),
        (RawValue::from("?"), Value::Missing),
        (RawValue::from(" 2022 "), Value::Integer(2022)),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize_field(&raw, FieldKind::Year), expected, "{raw:?}");
    }
}

proptest! {
    #[test]
    fn year_is_kept_exactly_when_in_range(year in 1000i64..3000) {
        let cleaned = normalize_field(&RawValue::Integer(year), FieldKind::Year);
        if (1900..=2025).contains(&year) {
            prop_assert_eq!(cleaned, Value::Integer(year));
        } else {
            prop_assert_eq!(cleaned, Value::Missing);
        }
    }

    #[test]
    fn unit_suffix_is_discarded(weight in 0u32..100_000, unit in "(kg|lb| kg|KG)?") {
        let raw = format!("{weight}{unit}");
        prop_assert_eq!(
            normalize_field(&RawValue::from(raw.as_str()), FieldKind::NumericUnit),
            Value::Number(f64::from(weight))
        );
    }
}

//! Normalization functions for raw field values.
//!
//! - **sentinel**: "no data" tokens shared by every kind
//! - **numeric**: number extraction from values carrying units
//! - **year**: integer coercion with range bounding
//!
//! [`normalize_field`] dispatches on [`FieldKind`]. It is a pure function and
//! never fails: anything unusable becomes [`Value::Missing`].

pub mod numeric;
pub mod sentinel;
pub mod year;

pub use numeric::extract_number;
pub use sentinel::{SENTINELS, is_sentinel};
pub use year::normalize_year;

use lifting_model::{FieldKind, RawValue, Value};

/// Clean one raw value according to its column kind.
pub fn normalize_field(raw: &RawValue, kind: FieldKind) -> Value {
    let Some(text) = raw.as_text() else {
        return Value::Missing;
    };
    if is_sentinel(&text) {
        return Value::Missing;
    }
    match kind {
        FieldKind::Text | FieldKind::Categorical => Value::Text(text.trim().to_string()),
        FieldKind::NumericUnit => match raw {
            RawValue::Integer(value) => Value::Number(*value as f64),
            RawValue::Float(value) if value.is_finite() => Value::Number(*value),
            _ => extract_number(&text).map_or(Value::Missing, Value::Number),
        },
        FieldKind::Year => normalize_year(&text).map_or(Value::Missing, Value::Integer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_preserves_case() {
        assert_eq!(
            normalize_field(&RawValue::from(" Gold "), FieldKind::Categorical),
            Value::text("Gold")
        );
    }

    #[test]
    fn primitive_numbers_pass_through() {
        assert_eq!(
            normalize_field(&RawValue::Integer(200), FieldKind::NumericUnit),
            Value::Number(200.0)
        );
        assert_eq!(
            normalize_field(&RawValue::Float(2021.0), FieldKind::Year),
            Value::Integer(2021)
        );
        assert_eq!(
            normalize_field(&RawValue::Null, FieldKind::Text),
            Value::Missing
        );
    }
}

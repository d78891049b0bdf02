use lifting_model::FieldKind;

/// Coerces `value` to a year within the accepted range.
///
/// Integral floats such as `"2020.0"` are accepted. Fractional, unparseable,
/// and out-of-range values yield `None`.
pub fn normalize_year(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let year = match trimmed.parse::<i64>() {
        Ok(year) => year,
        Err(_) => {
            let float = trimmed.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 {
                return None;
            }
            float as i64
        }
    };
    (FieldKind::YEAR_MIN..=FieldKind::YEAR_MAX)
        .contains(&year)
        .then_some(year)
}

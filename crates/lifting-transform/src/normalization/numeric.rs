//! Numeric normalization utilities.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("decimal pattern is valid"));

/// Extracts the first decimal number in `value`, discarding any unit.
///
/// `"100kg"` yields `100.0`, `"82.5 kg"` yields `82.5`, and text without
/// digits yields `None`. Signs are not part of the match.
pub fn extract_number(value: &str) -> Option<f64> {
    DECIMAL
        .find(value)
        .and_then(|found| found.as_str().parse::<f64>().ok())
}

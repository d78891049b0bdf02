/// Normalize an authored column name to `snake_case` form.
///
/// Strips surrounding whitespace (and a UTF-8 BOM), lowercases, and joins the
/// remaining whitespace-separated parts with a single underscore, so
/// `"  Total   Kg "` becomes `"total_kg"`.
///
/// Whitespace runs collapse into one underscore rather than one underscore
/// per space, so `"Total  Kg"` and `"Total Kg"` name the same column.
pub fn normalize_column_name(raw: &str) -> String {
    let trimmed = raw.trim_matches('\u{feff}').trim();
    let mut normalized = String::with_capacity(trimmed.len());
    for (idx, part) in trimmed.split_whitespace().enumerate() {
        if idx > 0 {
            normalized.push('_');
        }
        normalized.push_str(&part.to_lowercase());
    }
    normalized
}

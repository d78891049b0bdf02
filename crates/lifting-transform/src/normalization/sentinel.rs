/// Raw tokens that mean "no data", compared case-insensitively after trimming.
pub const SENTINELS: &[&str] = &["?", "n/a", "na", "unknown", "-1", "none", ""];

pub fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

//! Config path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the warehouse config file.
pub const CONFIG_ENV_VAR: &str = "LIFTING_WAREHOUSE_CONFIG";

/// Config file named by `LIFTING_WAREHOUSE_CONFIG`, if set.
///
/// When unset, the embedded gym-lifters layout (`config/warehouse.toml` in
/// the workspace) is used.
pub fn config_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

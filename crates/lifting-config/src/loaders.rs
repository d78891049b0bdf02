use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use lifting_model::{WarehouseSchema, normalize_column_name};

use crate::error::ConfigError;
use crate::paths::config_override;

const EMBEDDED_SCHEMA: &str = include_str!("../../../config/warehouse.toml");
const INLINE_ORIGIN: &str = "<inline>";

/// Load the schema from `LIFTING_WAREHOUSE_CONFIG`, or the embedded default.
pub fn load_default_schema() -> Result<WarehouseSchema, ConfigError> {
    match config_override() {
        Some(path) => load_schema(&path),
        None => {
            debug!("using embedded warehouse schema");
            parse_schema(EMBEDDED_SCHEMA)
        }
    }
}

pub fn load_schema(path: &Path) -> Result<WarehouseSchema, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|error| ConfigError::io(path, error))?;
    let schema = parse_with_origin(&source, path)?;
    debug!(
        path = %path.display(),
        dimensions = schema.dimensions.len(),
        "loaded warehouse schema"
    );
    Ok(schema)
}

/// Parse and validate a TOML schema held in memory.
pub fn parse_schema(source: &str) -> Result<WarehouseSchema, ConfigError> {
    parse_with_origin(source, Path::new(INLINE_ORIGIN))
}

fn parse_with_origin(source: &str, origin: &Path) -> Result<WarehouseSchema, ConfigError> {
    let schema: WarehouseSchema = toml::from_str(source).map_err(|source| ConfigError::Toml {
        path: PathBuf::from(origin),
        source,
    })?;
    validate_schema(schema)
}

/// Normalize every column name and check cross references.
///
/// Column names are normalized the same way the record cleaner normalizes
/// headers, so a config may say `"Total Kg"`.
pub fn validate_schema(mut schema: WarehouseSchema) -> Result<WarehouseSchema, ConfigError> {
    let mut columns = BTreeMap::new();
    for (name, kind) in std::mem::take(&mut schema.columns) {
        let normalized = normalize_column_name(&name);
        if normalized.is_empty() {
            return Err(ConfigError::invalid("column kind with blank name"));
        }
        columns.insert(normalized, kind);
    }
    schema.columns = columns;

    let mut seen = BTreeSet::new();
    for dimension in &mut schema.dimensions {
        dimension.name = dimension.name.trim().to_string();
        if dimension.name.is_empty() {
            return Err(ConfigError::invalid("dimension with blank name"));
        }
        if !seen.insert(dimension.name.clone()) {
            return Err(ConfigError::DuplicateDimension {
                name: dimension.name.clone(),
            });
        }
        normalize_all(&mut dimension.natural_key);
        normalize_all(&mut dimension.attributes);
        if dimension.natural_key.is_empty() {
            return Err(ConfigError::EmptyNaturalKey {
                name: dimension.name.clone(),
            });
        }
    }

    let fact = &mut schema.fact;
    fact.name = fact.name.trim().to_string();
    if fact.name.is_empty() {
        return Err(ConfigError::invalid("fact with blank name"));
    }
    let mut required = BTreeSet::new();
    for dimension in &mut fact.dimensions {
        *dimension = dimension.trim().to_string();
        if !seen.contains(dimension.as_str()) {
            return Err(ConfigError::UnknownDimension {
                fact: fact.name.clone(),
                dimension: dimension.clone(),
            });
        }
        if !required.insert(dimension.clone()) {
            return Err(ConfigError::invalid(format!(
                "fact {} lists dimension {dimension} twice",
                fact.name
            )));
        }
    }
    normalize_all(&mut fact.measures);
    Ok(schema)
}

fn normalize_all(columns: &mut [String]) {
    for column in columns.iter_mut() {
        *column = normalize_column_name(column);
    }
}

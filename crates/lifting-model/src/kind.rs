//! Semantic column kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::relation::FieldType;

/// How the values of a column are cleaned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Trimmed free text.
    #[default]
    Text,
    /// A number possibly followed by a unit, e.g. `"100kg"`.
    NumericUnit,
    /// A calendar year bounded to [`FieldKind::YEAR_MIN`, `FieldKind::YEAR_MAX`].
    Year,
    /// A category label; case is preserved.
    Categorical,
}

impl FieldKind {
    pub const YEAR_MIN: i64 = 1900;
    pub const YEAR_MAX: i64 = 2025;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::NumericUnit => "numeric_unit",
            Self::Year => "year",
            Self::Categorical => "categorical",
        }
    }

    /// The persisted type of a column holding values of this kind.
    pub fn field_type(self) -> FieldType {
        match self {
            Self::Text | Self::Categorical => FieldType::Text,
            Self::NumericUnit => FieldType::Real,
            Self::Year => FieldType::Integer,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "numeric_unit" => Ok(Self::NumericUnit),
            "year" => Ok(Self::Year),
            "categorical" => Ok(Self::Categorical),
            other => Err(ModelError::UnknownFieldKind {
                value: other.to_string(),
            }),
        }
    }
}

//! Named, typed relations handed to warehouse sinks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Fact,
    Dimension,
}

impl RelationKind {
    /// Table-name prefix (`fact_` / `dim_`).
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Fact => "fact_",
            Self::Dimension => "dim_",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fact => f.write_str("fact"),
            Self::Dimension => f.write_str("dimension"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Real,
    Text,
}

impl FieldType {
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// A fact column pointing at a dimension's surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub references: String,
    pub referenced_column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub name: String,
    pub kind: RelationKind,
    pub fields: Vec<Field>,
    pub primary_key: Option<String>,
    pub foreign_keys: Vec<ForeignKey>,
    pub rows: Vec<Vec<Value>>,
}

impl Relation {
    pub fn new(name: impl Into<String>, kind: RelationKind, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            kind,
            fields,
            primary_key: None,
            foreign_keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_foreign_key(
        mut self,
        column: impl Into<String>,
        references: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column: column.into(),
            references: references.into(),
            referenced_column: referenced_column.into(),
        });
        self
    }

    /// Append a row; its width must match the field list.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(ModelError::RowLengthMismatch {
                relation: self.name.clone(),
                expected: self.fields.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn is_fact(&self) -> bool {
        self.kind == RelationKind::Fact
    }

    pub fn is_dimension(&self) -> bool {
        self.kind == RelationKind::Dimension
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == column)
    }

    /// Iterate one column's values.
    pub fn column_values(&self, column: &str) -> Result<impl Iterator<Item = &Value>> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| ModelError::UnknownColumn {
                relation: self.name.clone(),
                column: column.to_string(),
            })?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }
}

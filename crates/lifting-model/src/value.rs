//! Scalar values for raw and cleaned rows.

use std::borrow::Cow;
use std::fmt;

/// A raw scalar exactly as the ingest source supplied it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Text rendering used by the field normalizer; `None` for nulls.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(Cow::Borrowed(if *value { "true" } else { "false" })),
            Self::Integer(value) => Some(Cow::Owned(value.to_string())),
            Self::Float(value) => Some(Cow::Owned(format_number(*value))),
            Self::Text(value) => Some(Cow::Borrowed(value.as_str())),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A cleaned, typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No usable data (sentinel, empty, malformed, or out of range).
    #[default]
    Missing,
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The hashable form used inside natural keys.
    ///
    /// Missing values and blank text have no key part.
    pub fn key_part(&self) -> Option<KeyPart> {
        match self {
            Self::Missing => None,
            Self::Integer(value) => Some(KeyPart::Integer(*value)),
            Self::Number(value) if value.is_nan() => None,
            // -0.0 and 0.0 must hash identically.
            Self::Number(value) => Some(KeyPart::Number((*value + 0.0).to_bits())),
            Self::Text(value) if value.trim().is_empty() => None,
            Self::Text(value) => Some(KeyPart::Text(value.clone())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One component of a [`NaturalKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyPart {
    Integer(i64),
    /// IEEE-754 bit pattern of a finite float.
    Number(u64),
    Text(String),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(bits) => f.write_str(&format_number(f64::from_bits(*bits))),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Ordered tuple of attribute values identifying a dimension entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NaturalKey(pub Vec<KeyPart>);

impl NaturalKey {
    /// Build a key from values; `None` when any position is missing or blank.
    pub fn from_values<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .map(Value::key_part)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, part) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("|")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// Formats a floating-point number without trailing zeros (`10.50` -> `10.5`,
/// `100.0` -> `100`).
pub fn format_number(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

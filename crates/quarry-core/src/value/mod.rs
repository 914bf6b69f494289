//! Runtime values: operand conversion results and record field reads.

pub mod compare;
pub mod convert;


use crate::model::FieldKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// re-exports
pub use convert::{ConvertError, convert_list, convert_scalar};

pub(crate) use compare::{TextOp, compare_eq, compare_order, compare_text};

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TextMode {
    /// Case-sensitive (ordinal) comparison.
    #[default]
    Cs,
    /// Case-insensitive comparison.
    Ci,
}

///
/// Value
///
/// Runtime scalar/list value produced by operand conversion and read from
/// records during in-memory evaluation.
///
/// Null → the field's value is absent (SQL NULL).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Enum(String),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value participates in cross-width numeric comparison.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    #[must_use]
    pub fn matches_kind(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), FieldKind::Bool)
                | (Self::Int(_), FieldKind::Int)
                | (Self::Uint(_), FieldKind::Uint)
                | (Self::Float(_), FieldKind::Float)
                | (Self::Text(_), FieldKind::Text)
                | (Self::Uuid(_), FieldKind::Uuid)
                | (Self::Timestamp(_), FieldKind::Timestamp)
                | (Self::Enum(_), FieldKind::Enum { .. })
        )
    }

    #[must_use]
    pub(crate) fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        let (Self::Text(hay), Self::Text(needle)) = (self, needle) else {
            return None;
        };

        Some(match mode {
            TextMode::Cs => hay.contains(needle.as_str()),
            TextMode::Ci => casefold(hay).contains(&casefold(needle)),
        })
    }

    #[must_use]
    pub(crate) fn text_starts_with(&self, prefix: &Self, mode: TextMode) -> Option<bool> {
        let (Self::Text(hay), Self::Text(prefix)) = (self, prefix) else {
            return None;
        };

        Some(match mode {
            TextMode::Cs => hay.starts_with(prefix.as_str()),
            TextMode::Ci => casefold(hay).starts_with(&casefold(prefix)),
        })
    }

    #[must_use]
    pub(crate) fn text_ends_with(&self, suffix: &Self, mode: TextMode) -> Option<bool> {
        let (Self::Text(hay), Self::Text(suffix)) = (self, suffix) else {
            return None;
        };

        Some(match mode {
            TextMode::Cs => hay.ends_with(suffix.as_str()),
            TextMode::Ci => casefold(hay).ends_with(&casefold(suffix)),
        })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

pub(crate) fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}

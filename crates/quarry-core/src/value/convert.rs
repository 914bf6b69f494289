//! Module: value::convert
//! Responsibility: operand text to typed value conversion.
//! Does not own: comparator legality or comparison semantics.
//! Boundary: predicate compilation converts every operand exactly once here.

use crate::{
    model::{FieldKind, FieldType},
    value::Value,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

///
/// ConvertError
///
/// Invalid operand text or an invalid operand set for a membership
/// comparator.
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConvertError {
    #[error("operand '{text}' is not a valid {kind} literal")]
    Unparseable { text: String, kind: String },

    #[error("operand '{text}' does not name a variant of the enumerated field")]
    UnknownEnumVariant { text: String },

    #[error("duplicate operand '{text}' in membership list")]
    DuplicateOperand { text: String },

    #[error("null operand is not allowed against non-nullable type {declared}")]
    NullOperand { declared: String },
}

/// Convert one operand into a typed scalar for the target field type.
///
/// A null operand is accepted only when the target is nullable and converts
/// to a typed null.
pub fn convert_scalar(operand: Option<&str>, target: &FieldType) -> Result<Value, ConvertError> {
    let Some(text) = operand else {
        if target.nullable {
            return Ok(Value::Null);
        }
        return Err(ConvertError::NullOperand {
            declared: target.to_string(),
        });
    };

    match &target.kind {
        FieldKind::Text => Ok(Value::Text(text.to_string())),
        FieldKind::Bool => parse_bool(text),
        FieldKind::Int => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| unparseable(text, &target.kind)),
        FieldKind::Uint => text
            .parse::<u64>()
            .map(Value::Uint)
            .map_err(|_| unparseable(text, &target.kind)),
        FieldKind::Float => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| unparseable(text, &target.kind)),
        FieldKind::Uuid => Uuid::parse_str(text)
            .map(Value::Uuid)
            .map_err(|_| unparseable(text, &target.kind)),
        FieldKind::Timestamp => DateTime::parse_from_rfc3339(text)
            .map(|parsed| Value::Timestamp(parsed.with_timezone(&Utc)))
            .map_err(|_| unparseable(text, &target.kind)),
        FieldKind::Enum { variants } => parse_enum(text, variants),
    }
}

/// Convert a membership operand list.
///
/// Duplicate operand text is rejected; a legal null is appended after every
/// non-null converted value, so list order does not preserve operand order
/// when nulls are present (documented contract).
pub fn convert_list(
    operands: &[Option<String>],
    target: &FieldType,
) -> Result<Vec<Value>, ConvertError> {
    let mut seen: BTreeSet<Option<&str>> = BTreeSet::new();
    let mut out = Vec::with_capacity(operands.len());
    let mut saw_null = false;

    for operand in operands {
        let key = operand.as_deref();
        if !seen.insert(key) {
            return Err(ConvertError::DuplicateOperand {
                text: key.unwrap_or("<null>").to_string(),
            });
        }

        match key {
            Some(text) => out.push(convert_scalar(Some(text), target)?),
            None => {
                if !target.nullable {
                    return Err(ConvertError::NullOperand {
                        declared: target.to_string(),
                    });
                }
                saw_null = true;
            }
        }
    }

    if saw_null {
        out.push(Value::Null);
    }

    Ok(out)
}

// Boolean literals accept canonical spellings plus "1"/"0".
fn parse_bool(text: &str) -> Result<Value, ConvertError> {
    match text {
        "1" => Ok(Value::Bool(true)),
        "0" => Ok(Value::Bool(false)),
        _ if text.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        _ if text.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        _ => Err(unparseable(text, &FieldKind::Bool)),
    }
}

// Enumerated-name parse is case-insensitive; the declared casing wins.
fn parse_enum(text: &str, variants: &[String]) -> Result<Value, ConvertError> {
    variants
        .iter()
        .find(|variant| variant.eq_ignore_ascii_case(text))
        .map(|variant| Value::Enum(variant.clone()))
        .ok_or_else(|| ConvertError::UnknownEnumVariant {
            text: text.to_string(),
        })
}

fn unparseable(text: &str, kind: &FieldKind) -> ConvertError {
    ConvertError::Unparseable {
        text: text.to_string(),
        kind: kind.to_string(),
    }
}

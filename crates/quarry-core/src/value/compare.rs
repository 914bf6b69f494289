//! Module: value::compare
//! Responsibility: value comparison semantics for predicate evaluation.
//! Does not own: operand conversion or comparator legality.
//! Boundary: both predicate flavors delegate compare behavior here.

use crate::value::{TextMode, Value, casefold};
use num_traits::ToPrimitive;
use std::{cmp::Ordering, mem::discriminant};

///
/// TextOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TextOp {
    Contains,
    StartsWith,
    EndsWith,
}

/// Equality under an optional case-insensitive text mode.
///
/// Returns `None` when the comparison is invalid for the operand pair;
/// evaluation treats that as false.
#[must_use]
pub(crate) fn compare_eq(left: &Value, right: &Value, mode: TextMode) -> Option<bool> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Null, _) | (_, Value::Null) => Some(false),
        (Value::Text(l), Value::Text(r)) => Some(match mode {
            TextMode::Cs => l == r,
            TextMode::Ci => casefold(l) == casefold(r),
        }),
        _ if left.is_numeric() && right.is_numeric() => {
            cmp_numeric(left, right).map(|ordering| ordering == Ordering::Equal)
        }
        _ if same_variant(left, right) => Some(left == right),
        _ => None,
    }
}

/// Ordering comparison; `None` when the pair does not admit an order.
#[must_use]
pub(crate) fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::Uuid(l), Value::Uuid(r)) => Some(l.cmp(r)),
        (Value::Timestamp(l), Value::Timestamp(r)) => Some(l.cmp(r)),
        _ if left.is_numeric() && right.is_numeric() => cmp_numeric(left, right),
        _ => None,
    }
}

/// Text-specific comparison operations.
#[must_use]
pub(crate) fn compare_text(
    left: &Value,
    right: &Value,
    mode: TextMode,
    op: TextOp,
) -> Option<bool> {
    match op {
        TextOp::Contains => left.text_contains(right, mode),
        TextOp::StartsWith => left.text_starts_with(right, mode),
        TextOp::EndsWith => left.text_ends_with(right, mode),
    }
}

// Cross-width numeric comparison: Int/Uint widen to i128, floats compare
// through f64.
fn cmp_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
        (Value::Uint(l), Value::Uint(r)) => Some(l.cmp(r)),
        (Value::Int(l), Value::Uint(r)) => Some(i128::from(*l).cmp(&i128::from(*r))),
        (Value::Uint(l), Value::Int(r)) => Some(i128::from(*l).cmp(&i128::from(*r))),
        (Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
        (Value::Float(l), _) => numeric_to_f64(right).and_then(|r| l.partial_cmp(&r)),
        (_, Value::Float(r)) => numeric_to_f64(left).and_then(|l| l.partial_cmp(r)),
        _ => None,
    }
}

fn numeric_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => i.to_f64(),
        Value::Uint(u) => u.to_f64(),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}

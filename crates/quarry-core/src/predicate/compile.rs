//! Module: predicate::compile
//! Responsibility: the flavor-independent half of compilation — operand
//! arity, legality, operand conversion, and child folding.
//! Does not own: output shapes; push-down and in-memory trees are built
//! by their own modules on top of these parts.
//! Boundary: validation order is fixed — arity, then legality, then
//! conversion — so both flavors report identical errors for identical
//! inputs.

use crate::{
    error::Error,
    path::ScalarAccessor,
    predicate::{
        legality, CompileError, Comparator, Connector, FilterExpression, LegalityError,
        PredicateFlavor,
    },
    value::{convert_list, convert_scalar, TextMode, Value},
};

///
/// OperandValues
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum OperandValues {
    /// Single-value comparator operand.
    One(Value),
    /// Membership operand set, deduplicated, any legal null last.
    Many(Vec<Value>),
}

///
/// ScalarCondition
///
/// A fully validated scalar condition: everything either output shape
/// needs, with operand text already converted.
///

pub(crate) struct ScalarCondition {
    pub comparator: Comparator,
    pub mode: TextMode,
    pub values: OperandValues,
}

/// Validate one scalar condition for the given flavor.
pub(crate) fn scalar_condition(
    accessor: &ScalarAccessor,
    expr: &FilterExpression,
    flavor: PredicateFlavor,
) -> Result<ScalarCondition, Error> {
    let comparator = expr.comparator;

    if !comparator.is_membership() && expr.operands.len() != 1 {
        return Err(CompileError::OperandArity {
            comparator,
            actual: expr.operands.len(),
        }
        .into());
    }

    legality::check(comparator, &accessor.field_type, expr.text_mode.is_some())?;

    if comparator == Comparator::Like && !flavor.supports_native_pattern_match() {
        return Err(LegalityError::UnsupportedInMemory { comparator }.into());
    }

    let values = if comparator.is_membership() {
        OperandValues::Many(convert_list(&expr.operands, &accessor.field_type)?)
    } else {
        let operand = expr.operands[0].as_deref();
        OperandValues::One(convert_scalar(operand, &accessor.field_type)?)
    };

    Ok(ScalarCondition {
        comparator,
        mode: expr.text_mode.unwrap_or_default(),
        values,
    })
}

/// Left fold over a group's children.
///
/// The accumulator starts from the first child; each subsequent child
/// joins via the connector of the child *before* it, so the last
/// child's connector is never consulted. Sequential, never
/// precedence-aware.
pub(crate) fn fold_children<T>(
    children: &[FilterExpression],
    mut compile: impl FnMut(&FilterExpression) -> Result<T, Error>,
    mut combine: impl FnMut(Connector, T, T) -> T,
) -> Result<T, Error> {
    let mut iter = children.iter();
    let first = iter.next().ok_or(CompileError::EmptyGroup)?;
    let mut acc = compile(first)?;
    let mut connector = first.connector;

    for child in iter {
        let next = compile(child)?;
        acc = combine(connector, acc, next);
        connector = child.connector;
    }

    Ok(acc)
}

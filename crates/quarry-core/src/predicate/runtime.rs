//! Module: predicate::runtime
//! Responsibility: compile filter descriptions into directly callable
//! row predicates over `&dyn Record`.
//! Does not own: validation (shared with the push-down flavor) or native
//! pattern matching, which this flavor refuses at compile time.
//! Boundary: evaluation is total — a missing field or broken relation
//! chain reads as null and every comparison is null-safe.

use crate::{
    error::Error,
    model::ModelRegistry,
    path::{AccessorCache, AccessorShape, Getter, ScalarAccessor},
    predicate::{
        compile::{fold_children, scalar_condition, OperandValues},
        Comparator, Connector, FilterExpression, PredicateFlavor,
    },
    traits::{Record, Related},
    value::{compare_eq, compare_order, compare_text, TextMode, TextOp, Value},
};
use std::{cmp::Ordering, sync::Arc};

///
/// RowPredicate
///
/// A compiled boolean test over one record. Cheap to clone and safe to
/// share across threads; holds only converted operands and accessors.
///

#[derive(Clone)]
pub struct RowPredicate {
    test: Arc<dyn Fn(&dyn Record) -> bool + Send + Sync>,
}

impl RowPredicate {
    #[must_use]
    pub fn matches(&self, record: &dyn Record) -> bool {
        (self.test)(record)
    }

    fn new(test: impl Fn(&dyn Record) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }
}

impl std::fmt::Debug for RowPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowPredicate").finish_non_exhaustive()
    }
}

pub(crate) fn compile(
    registry: &ModelRegistry,
    cache: &AccessorCache,
    root: &str,
    expr: &FilterExpression,
) -> Result<RowPredicate, Error> {
    if expr.is_group() {
        return fold_children(
            &expr.children,
            |child| compile(registry, cache, root, child),
            combine,
        );
    }

    let accessor = cache.resolve(registry, root, &expr.path)?;
    match &accessor.shape {
        AccessorShape::Scalar(scalar) => compile_scalar(scalar, expr),
        AccessorShape::Existential(exist) => {
            let sub = FilterExpression {
                path: exist.sub_path.clone(),
                children: Vec::new(),
                ..expr.clone()
            };
            let element = compile(registry, cache, &exist.element_entity, &sub)?;
            let navigations = exist.navigations.clone();

            Ok(RowPredicate::new(move |record| {
                any_element(record, &navigations, &element)
            }))
        }
    }
}

// Walk the to-one prefix, then test each record reached by the final
// to-many hop. A broken chain selects nothing.
fn any_element(record: &dyn Record, navigations: &[String], element: &RowPredicate) -> bool {
    let Some((last, prefix)) = navigations.split_last() else {
        return false;
    };

    let mut current = record;
    for navigation in prefix {
        current = match current.related(navigation) {
            Related::One(next) => next,
            Related::None | Related::Many(_) => return false,
        };
    }

    current
        .related(last)
        .records()
        .into_iter()
        .any(|candidate| element.matches(candidate))
}

fn compile_scalar(scalar: &ScalarAccessor, expr: &FilterExpression) -> Result<RowPredicate, Error> {
    let condition = scalar_condition(scalar, expr, PredicateFlavor::InMemory)?;
    let getter = scalar.getter.clone();
    let mode = condition.mode;

    let predicate = match (condition.comparator, condition.values) {
        (Comparator::Equal, OperandValues::One(operand)) => {
            eval(getter, move |value| {
                compare_eq(value, &operand, mode) == Some(true)
            })
        }
        (Comparator::NotEqual, OperandValues::One(operand)) => {
            eval(getter, move |value| {
                compare_eq(value, &operand, mode) == Some(false)
            })
        }
        (comparator, OperandValues::One(operand)) if comparator.is_ordering() => {
            eval(getter, move |value| {
                let Some(ordering) = compare_order(value, &operand) else {
                    return false;
                };
                ordering_matches(comparator, ordering)
            })
        }
        (Comparator::Contains, OperandValues::One(operand)) => {
            text_eval(getter, TextOp::Contains, operand, mode)
        }
        (Comparator::StartsWith, OperandValues::One(operand)) => {
            text_eval(getter, TextOp::StartsWith, operand, mode)
        }
        (Comparator::EndsWith, OperandValues::One(operand)) => {
            text_eval(getter, TextOp::EndsWith, operand, mode)
        }
        (Comparator::In, OperandValues::Many(values)) => {
            eval(getter, move |value| in_list(value, &values, mode))
        }
        (Comparator::NotIn, OperandValues::Many(values)) => {
            eval(getter, move |value| !in_list(value, &values, mode))
        }
        // Like is rejected by validation for this flavor; any other
        // combination cannot leave `scalar_condition`.
        (comparator, _) => {
            return Err(crate::predicate::LegalityError::UnsupportedInMemory { comparator }.into());
        }
    };

    Ok(predicate)
}

fn eval(getter: Getter, test: impl Fn(&Value) -> bool + Send + Sync + 'static) -> RowPredicate {
    RowPredicate::new(move |record| {
        let value = getter(record).unwrap_or(Value::Null);
        test(&value)
    })
}

// Absent field value short-circuits to false.
fn text_eval(getter: Getter, op: TextOp, operand: Value, mode: TextMode) -> RowPredicate {
    eval(getter, move |value| {
        compare_text(value, &operand, mode, op) == Some(true)
    })
}

/// Deduplicated set membership; an empty set matches nothing, so its
/// complement matches everything.
fn in_list(value: &Value, values: &[Value], mode: TextMode) -> bool {
    values
        .iter()
        .any(|candidate| compare_eq(value, candidate, mode) == Some(true))
}

const fn ordering_matches(comparator: Comparator, ordering: Ordering) -> bool {
    match comparator {
        Comparator::GreaterThan => matches!(ordering, Ordering::Greater),
        Comparator::GreaterThanOrEqual => matches!(ordering, Ordering::Greater | Ordering::Equal),
        Comparator::LessThan => matches!(ordering, Ordering::Less),
        _ => matches!(ordering, Ordering::Less | Ordering::Equal),
    }
}

fn combine(connector: Connector, acc: RowPredicate, next: RowPredicate) -> RowPredicate {
    RowPredicate::new(move |record| match connector {
        Connector::And => acc.matches(record) && next.matches(record),
        Connector::Or => acc.matches(record) || next.matches(record),
    })
}

//! Module: predicate::pushdown
//! Responsibility: compile filter descriptions into a push-down expression
//! tree a remote execution engine can translate.
//! Does not own: validation (shared with the in-memory flavor) or query
//! execution.
//! Boundary: output references fields by declared-casing member chains;
//! no getter closures and no record types appear in this tree.

use crate::{
    error::Error,
    model::ModelRegistry,
    path::{AccessorCache, AccessorShape, ScalarAccessor},
    predicate::{
        compile::{fold_children, scalar_condition, OperandValues},
        Comparator, Connector, FilterExpression, PredicateFlavor,
    },
    value::{TextMode, Value},
};
use serde::{Deserialize, Serialize};

/// Declared-casing member chain from the root entity to a scalar field.
pub type FieldRef = Vec<String>;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

///
/// MatchOp
///
/// Text matching delegated to the remote engine. `Like` maps onto its
/// native pattern syntax untranslated.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatchOp {
    Contains,
    StartsWith,
    EndsWith,
    Like,
}

///
/// PushdownExpr
///
/// Boolean expression tree over one root entity. The data-fetch executor
/// owns translating this into its store's query language.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum PushdownExpr {
    Compare {
        field: FieldRef,
        op: CompareOp,
        value: Value,
        mode: TextMode,
    },
    Match {
        field: FieldRef,
        op: MatchOp,
        pattern: String,
        mode: TextMode,
    },
    In {
        field: FieldRef,
        values: Vec<Value>,
        mode: TextMode,
    },
    IsNull {
        field: FieldRef,
    },
    /// True iff at least one element reached through `navigations`
    /// satisfies the nested predicate, which is rooted at `element`.
    Exists {
        navigations: Vec<String>,
        element: String,
        predicate: Box<PushdownExpr>,
    },
    Not(Box<PushdownExpr>),
    And(Vec<PushdownExpr>),
    Or(Vec<PushdownExpr>),
    Literal(bool),
}

impl PushdownExpr {
    fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

pub(crate) fn compile(
    registry: &ModelRegistry,
    cache: &AccessorCache,
    root: &str,
    expr: &FilterExpression,
) -> Result<PushdownExpr, Error> {
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
            // Re-enter with the element entity as the new root; the
            // sub-path may itself carry another list segment.
            let sub = FilterExpression {
                path: exist.sub_path.clone(),
                children: Vec::new(),
                ..expr.clone()
            };
            let predicate = compile(registry, cache, &exist.element_entity, &sub)?;

            Ok(PushdownExpr::Exists {
                navigations: exist.navigations.clone(),
                element: exist.element_entity.clone(),
                predicate: Box::new(predicate),
            })
        }
    }
}

fn compile_scalar(scalar: &ScalarAccessor, expr: &FilterExpression) -> Result<PushdownExpr, Error> {
    let condition = scalar_condition(scalar, expr, PredicateFlavor::Pushdown)?;
    let field = scalar.field_ref.clone();
    let mode = condition.mode;

    let compiled = match (condition.comparator, condition.values) {
        (Comparator::Equal, OperandValues::One(Value::Null)) => PushdownExpr::IsNull { field },
        (Comparator::NotEqual, OperandValues::One(Value::Null)) => {
            PushdownExpr::IsNull { field }.negate()
        }
        (comparator, OperandValues::One(Value::Null)) if !comparator.is_membership() => {
            // Ordering or matching against null selects nothing.
            PushdownExpr::Literal(false)
        }
        (Comparator::Contains, OperandValues::One(value)) => {
            text_match(field, MatchOp::Contains, value, mode)
        }
        (Comparator::StartsWith, OperandValues::One(value)) => {
            text_match(field, MatchOp::StartsWith, value, mode)
        }
        (Comparator::EndsWith, OperandValues::One(value)) => {
            text_match(field, MatchOp::EndsWith, value, mode)
        }
        (Comparator::Like, OperandValues::One(value)) => {
            text_match(field, MatchOp::Like, value, mode)
        }
        (comparator, OperandValues::One(value)) => {
            let op = match comparator {
                Comparator::NotEqual => CompareOp::Ne,
                Comparator::GreaterThan => CompareOp::Gt,
                Comparator::GreaterThanOrEqual => CompareOp::Ge,
                Comparator::LessThan => CompareOp::Lt,
                Comparator::LessThanOrEqual => CompareOp::Le,
                _ => CompareOp::Eq,
            };

            PushdownExpr::Compare {
                field,
                op,
                value,
                mode,
            }
        }
        (comparator, OperandValues::Many(values)) => {
            let null_present = values.iter().any(Value::is_null);
            let typed: Vec<Value> = values.into_iter().filter(|v| !v.is_null()).collect();

            let membership = PushdownExpr::In {
                field: field.clone(),
                values: typed,
                mode,
            };
            let membership = if null_present {
                PushdownExpr::Or(vec![membership, PushdownExpr::IsNull { field }])
            } else {
                membership
            };

            match comparator {
                Comparator::NotIn => membership.negate(),
                _ => membership,
            }
        }
    };

    Ok(compiled)
}

// A null pattern matches nothing, mirroring the in-memory null-safe
// short-circuit.
fn text_match(field: FieldRef, op: MatchOp, value: Value, mode: TextMode) -> PushdownExpr {
    match value {
        Value::Text(pattern) => PushdownExpr::Match {
            field,
            op,
            pattern,
            mode,
        },
        _ => PushdownExpr::Literal(false),
    }
}

fn combine(connector: Connector, acc: PushdownExpr, next: PushdownExpr) -> PushdownExpr {
    match (connector, acc) {
        (Connector::And, PushdownExpr::And(mut children)) => {
            children.push(next);
            PushdownExpr::And(children)
        }
        (Connector::And, acc) => PushdownExpr::And(vec![acc, next]),
        (Connector::Or, PushdownExpr::Or(mut children)) => {
            children.push(next);
            PushdownExpr::Or(children)
        }
        (Connector::Or, acc) => PushdownExpr::Or(vec![acc, next]),
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, CompareOp, MatchOp, PushdownExpr};
    use crate::{
        path::AccessorCache,
        predicate::{model::operands, Comparator, Connector, FilterExpression},
        test_support::test_registry,
        value::{TextMode, Value},
    };

    fn pushdown(root: &str, expr: &FilterExpression) -> PushdownExpr {
        compile(&test_registry(), &AccessorCache::new(), root, expr).unwrap()
    }

    #[test]
    fn ordering_condition_compiles_to_a_typed_compare() {
        let expr = FilterExpression::condition("Age", Comparator::GreaterThan, operands(&["12"]));

        assert_eq!(
            pushdown("Person", &expr),
            PushdownExpr::Compare {
                field: vec!["Age".to_string()],
                op: CompareOp::Gt,
                value: Value::Int(12),
                mode: TextMode::Cs,
            }
        );
    }

    #[test]
    fn null_equality_becomes_a_null_test() {
        let expr = FilterExpression::condition("Nickname", Comparator::Equal, vec![None]);

        assert_eq!(
            pushdown("Person", &expr),
            PushdownExpr::IsNull {
                field: vec!["Nickname".to_string()]
            }
        );

        let expr = FilterExpression::condition("Nickname", Comparator::NotEqual, vec![None]);
        assert!(matches!(pushdown("Person", &expr), PushdownExpr::Not(_)));
    }

    #[test]
    fn membership_with_null_is_or_d_with_a_null_test() {
        let expr = FilterExpression {
            path: "Nickname".to_string(),
            comparator: Comparator::In,
            operands: vec![Some("Ace".to_string()), None],
            ..FilterExpression::default()
        };

        let PushdownExpr::Or(children) = pushdown("Person", &expr) else {
            panic!("expected Or of membership and null test");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], PushdownExpr::In { values, .. } if values.len() == 1));
        assert!(matches!(&children[1], PushdownExpr::IsNull { .. }));
    }

    #[test]
    fn not_in_wraps_the_membership_test() {
        let expr = FilterExpression::condition("Age", Comparator::NotIn, operands(&["1", "2"]));

        let PushdownExpr::Not(inner) = pushdown("Person", &expr) else {
            panic!("expected negation");
        };
        assert!(matches!(*inner, PushdownExpr::In { .. }));
    }

    #[test]
    fn like_is_available_in_this_flavor() {
        let expr = FilterExpression::condition("Name", Comparator::Like, operands(&["A%"]));

        assert_eq!(
            pushdown("Person", &expr),
            PushdownExpr::Match {
                field: vec!["Name".to_string()],
                op: MatchOp::Like,
                pattern: "A%".to_string(),
                mode: TextMode::Cs,
            }
        );
    }

    #[test]
    fn list_segment_compiles_to_an_existential_test() {
        let expr = FilterExpression::condition(
            "Employees[Age]",
            Comparator::GreaterThan,
            operands(&["30"]),
        );

        let PushdownExpr::Exists {
            navigations,
            element,
            predicate,
        } = pushdown("Company", &expr)
        else {
            panic!("expected existential test");
        };
        assert_eq!(navigations, vec!["Employees".to_string()]);
        assert_eq!(element, "Person");
        assert!(matches!(*predicate, PushdownExpr::Compare { .. }));
    }

    #[test]
    fn nested_list_segments_nest_existential_tests() {
        let expr = FilterExpression::condition(
            "Employees[Pets[Age]]",
            Comparator::GreaterThan,
            operands(&["10"]),
        );

        let PushdownExpr::Exists {
            navigations,
            element,
            predicate,
        } = pushdown("Company", &expr)
        else {
            panic!("expected outer existential test");
        };
        assert_eq!(navigations, vec!["Employees".to_string()]);
        assert_eq!(element, "Person");

        let PushdownExpr::Exists {
            navigations: inner_navigations,
            element: inner_element,
            predicate: inner,
        } = *predicate
        else {
            panic!("expected nested existential test");
        };
        assert_eq!(inner_navigations, vec!["Pets".to_string()]);
        assert_eq!(inner_element, "Pet");
        assert_eq!(
            *inner,
            PushdownExpr::Compare {
                field: vec!["Age".to_string()],
                op: CompareOp::Gt,
                value: Value::Int(10),
                mode: TextMode::Cs,
            }
        );
    }

    #[test]
    fn group_folds_left_by_the_previous_childs_connector() {
        // (age > 30 OR name starts with A) AND age < 60: the first
        // child's Or joins the second, the second child's And joins the
        // third.
        let expr = FilterExpression::group(vec![
            FilterExpression::condition("Age", Comparator::GreaterThan, operands(&["30"]))
                .with_connector(Connector::Or),
            FilterExpression::condition("Name", Comparator::StartsWith, operands(&["A"])),
            FilterExpression::condition("Age", Comparator::LessThan, operands(&["60"])),
        ]);

        let PushdownExpr::And(top) = pushdown("Person", &expr) else {
            panic!("expected top-level And");
        };
        assert_eq!(top.len(), 2);
        assert!(matches!(&top[0], PushdownExpr::Or(inner) if inner.len() == 2));
    }

    #[test]
    fn serde_round_trips_a_compiled_tree() {
        let expr = FilterExpression::condition("Age", Comparator::In, operands(&["1", "2"]));
        let compiled = pushdown("Person", &expr);

        let json = serde_json::to_string(&compiled).unwrap();
        let back: PushdownExpr = serde_json::from_str(&json).unwrap();

        assert_eq!(back, compiled);
    }
}

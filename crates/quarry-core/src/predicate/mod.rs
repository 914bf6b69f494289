//! Predicate compilation: filter descriptions become either push-down
//! expression trees for a remote engine or directly callable row
//! predicates for in-memory evaluation. Legality is shared; feature
//! coverage is not (`Like` is push-down only).

pub mod compile;
pub mod legality;
pub mod model;
pub mod pushdown;
pub mod runtime;

pub use model::{Comparator, Connector, FilterExpression};
pub use pushdown::{CompareOp, MatchOp, PushdownExpr};
pub use runtime::RowPredicate;

use crate::model::FieldType;
use thiserror::Error;

///
/// PredicateFlavor
///
/// The two compilation targets. Both share one legality table so they
/// never diverge on what is *legal*, only on what is *implemented*:
/// native pattern matching belongs to the remote engine.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PredicateFlavor {
    Pushdown,
    InMemory,
}

impl PredicateFlavor {
    #[must_use]
    pub const fn supports_native_pattern_match(self) -> bool {
        matches!(self, Self::Pushdown)
    }
}

///
/// CompileError
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CompileError {
    #[error("comparator {comparator} takes exactly one operand, got {actual}")]
    OperandArity {
        comparator: Comparator,
        actual: usize,
    },

    #[error("filter group has no children")]
    EmptyGroup,
}

///
/// LegalityError
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LegalityError {
    #[error("comparator {comparator} is not legal for field type {field_type}")]
    IllegalComparator {
        comparator: Comparator,
        field_type: FieldType,
    },

    #[error("a text comparison mode was supplied but field type {field_type} is not textual")]
    ModeOnNonText { field_type: FieldType },

    #[error("comparator {comparator} requires native pattern matching and cannot be evaluated in memory")]
    UnsupportedInMemory { comparator: Comparator },
}

//! Crate-level error wrapper for the engine's entry points.

use crate::{
    path::PathError,
    plan::{PlanError, RegisterError},
    predicate::{CompileError, LegalityError},
    value::ConvertError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Definition-time failures surfaced to whoever authored the filter or
/// query definition. None of these are retried and none are silently
/// defaulted; they indicate a defect in the definition itself.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Legality(#[from] LegalityError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

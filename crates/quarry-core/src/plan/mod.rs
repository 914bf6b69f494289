//! Fetch planning: filter registration with its safety gate, and the
//! merge of caller-requested shape with filter-required reads.

pub mod merge;
pub mod registry;
pub mod shape;

pub use merge::{plan_fetch, plan_fetch_with_depth};
pub use registry::{register_filter, FilterHandle, ProjectionKind, RegisterError};
pub use shape::{FieldProjectionInfo, NavigationPlan, RequiredFieldSet};

use thiserror::Error;

///
/// PlanError
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PlanError {
    #[error("unknown entity '{entity}'")]
    UnknownEntity { entity: String },
}

//! Core runtime for Quarry: entity models, runtime values, cached path
//! accessors, the two predicate compiler flavors, projection-requirement
//! analysis, and fetch-plan merging — exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod engine;
pub mod error;
pub mod model;
pub mod obs;
pub mod path;
pub mod plan;
pub mod predicate;
pub mod projection;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default navigation recursion depth for fetch-plan merging.
///
/// Filter-required paths needing more hops than this are skipped
/// best-effort; raising the depth is a planner extension, not a redesign.
pub const DEFAULT_MERGE_DEPTH: usize = 1;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No compilers, caches, or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        engine::Engine,
        error::Error,
        model::{EntityModel, FieldKind, FieldModel, FieldType, ModelRegistry, NavigationMetadata},
        plan::{FieldProjectionInfo, FilterHandle, NavigationPlan, ProjectionKind},
        predicate::{Comparator, Connector, FilterExpression},
        projection::ProjectionExpr,
        traits::{Record, Related},
        value::{TextMode, Value},
    };
}

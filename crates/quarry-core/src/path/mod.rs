//! Path resolution: dotted/bracketed path text parsed against entity models
//! into cached, reusable accessors.

pub mod accessor;
pub mod cache;
pub mod parse;

pub use accessor::{Accessor, AccessorShape, ExistentialAccessor, Getter, ScalarAccessor};
pub use cache::AccessorCache;
pub use parse::{FieldPath, PathSegment};

use thiserror::Error;

///
/// PathError
///
/// Path parse/resolution failures. These indicate a defect in a filter or
/// query definition and surface to whoever authored it; segment names keep
/// their original casing in messages.
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PathError {
    #[error("path '{path}' is empty")]
    EmptyPath { path: String },

    #[error("path '{path}' has an empty segment")]
    EmptySegment { path: String },

    #[error("path '{path}' has unbalanced brackets")]
    UnbalancedBracket { path: String },

    #[error("path '{path}' continues after a list segment; put the remainder inside the brackets")]
    TrailingAfterListSegment { path: String },

    #[error("unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    #[error("unknown member '{segment}' on entity '{entity}'")]
    UnknownMember { entity: String, segment: String },

    #[error(
        "member '{segment}' on entity '{entity}' is a to-many relation; \
         use '{segment}[..]' to test its elements"
    )]
    CollectionWithoutBracket { entity: String, segment: String },

    #[error("member '{segment}' on entity '{entity}' is not a to-many relation")]
    NotACollection { entity: String, segment: String },

    #[error("member '{segment}' on entity '{entity}' is a scalar field, not a relation")]
    NotANavigation { entity: String, segment: String },

    #[error("member '{segment}' on entity '{entity}' is a relation; filter one of its fields instead")]
    TerminalNavigation { entity: String, segment: String },
}

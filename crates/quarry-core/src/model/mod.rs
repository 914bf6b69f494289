//! Runtime data model definitions.
//!
//! Types in `model` are the runtime representations of schema-level
//! concepts: what the engine knows about an entity when it resolves paths,
//! validates comparators, and merges fetch plans. Schema discovery and
//! declaration belong to the external schema provider; `model` defines
//! what runs.

pub mod entity;
pub mod field;
pub mod navigation;

pub use entity::{EntityModel, ModelRegistry, ModelRegistryBuilder};
pub use field::{FieldClass, FieldKind, FieldModel, FieldType};
pub use navigation::NavigationMetadata;

use serde::{Deserialize, Serialize};

///
/// NavigationMetadata
///
/// Relation descriptor supplied by the external schema provider; read-only
/// to this engine. `is_abstract_target` marks polymorphic relations, which
/// can never be satisfied by a narrow scalar projection — only by a full
/// related-record fetch.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavigationMetadata {
    pub name: String,
    pub target_type: String,
    pub is_collection: bool,
    pub is_nullable: bool,
    pub is_abstract_target: bool,
}

impl NavigationMetadata {
    /// To-one relation.
    #[must_use]
    pub fn to_one(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            is_collection: false,
            is_nullable: false,
            is_abstract_target: false,
        }
    }

    /// To-many relation.
    #[must_use]
    pub fn to_many(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            is_collection: true,
            ..Self::to_one(name, target_type)
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    #[must_use]
    pub fn abstract_target(mut self) -> Self {
        self.is_abstract_target = true;
        self
    }
}

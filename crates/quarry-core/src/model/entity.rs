use crate::model::{field::FieldModel, navigation::NavigationMetadata};
use std::{collections::BTreeMap, sync::Arc};

///
/// EntityModel
///
/// Runtime model for one entity: scalar fields, declared key names, and
/// navigations. Supplied by the external schema provider at setup time and
/// immutable afterwards.
///

#[derive(Clone, Debug)]
pub struct EntityModel {
    /// Stable external entity name used in paths and plans.
    pub entity_name: String,
    /// Ordered field list (authoritative for resolution and legality).
    pub fields: Vec<FieldModel>,
    /// Declared key names (always fetched by the executor).
    pub key_names: Vec<String>,
    /// Relation descriptors, read-only to this engine.
    pub navigations: Vec<NavigationMetadata>,
}

impl EntityModel {
    #[must_use]
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            fields: Vec::new(),
            key_names: Vec::new(),
            navigations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_key(mut self, name: impl Into<String>) -> Self {
        self.key_names.push(name.into());
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationMetadata) -> Self {
        self.navigations.push(navigation);
        self
    }

    /// Case-insensitive field lookup; declared casing is preserved on the
    /// result.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive navigation lookup.
    #[must_use]
    pub fn navigation(&self, name: &str) -> Option<&NavigationMetadata> {
        self.navigations
            .iter()
            .find(|navigation| navigation.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn is_key_name(&self, name: &str) -> bool {
        self.key_names.iter().any(|key| key.eq_ignore_ascii_case(name))
    }
}

///
/// ModelRegistry
///
/// Immutable entity-model lookup keyed by entity name (case-insensitive).
/// Built once at setup; queries only read. The accessor cache, not this
/// registry, is the engine's only shared mutable state.
///

#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    entities: BTreeMap<String, Arc<EntityModel>>,
}

impl ModelRegistry {
    #[must_use]
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Arc<EntityModel>> {
        self.entities.get(&name.to_lowercase())
    }
}

///
/// ModelRegistryBuilder
///

#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    entities: BTreeMap<String, Arc<EntityModel>>,
}

impl ModelRegistryBuilder {
    #[must_use]
    pub fn entity(mut self, model: EntityModel) -> Self {
        self.entities
            .insert(model.entity_name.to_lowercase(), Arc::new(model));
        self
    }

    #[must_use]
    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            entities: self.entities,
        }
    }
}

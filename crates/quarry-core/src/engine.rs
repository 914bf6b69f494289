//! Module: engine
//! Responsibility: the engine's entry points — predicate compilation in
//! both flavors, filter registration, and fetch planning — over one
//! model registry and one shared accessor cache.
//! Does not own: query execution or I/O of any kind.
//! Boundary: the accessor cache is the only shared mutable state; every
//! other operation is a pure function of its inputs.

use crate::{
    error::Error,
    model::ModelRegistry,
    obs,
    path::{Accessor, AccessorCache},
    plan::{
        self, FieldProjectionInfo, FilterHandle, PlanError, ProjectionKind,
    },
    predicate::{pushdown, runtime, FilterExpression, PushdownExpr, RowPredicate},
    projection::ProjectionExpr,
};
use std::sync::Arc;

///
/// Engine
///
/// One engine per schema. Cheap to share behind an `Arc`; compilation
/// and planning take `&self` and are safe to call concurrently.
///

#[derive(Debug)]
pub struct Engine {
    registry: ModelRegistry,
    cache: AccessorCache,
}

impl Engine {
    #[must_use]
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            cache: AccessorCache::new(),
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Resolve (or fetch from cache) the accessor for one path.
    pub fn accessor(&self, root: &str, path: &str) -> Result<Arc<Accessor>, Error> {
        Ok(self.cache.resolve(&self.registry, root, path)?)
    }

    /// Compile a filter description into a push-down expression tree.
    pub fn compile_pushdown(
        &self,
        root: &str,
        expr: &FilterExpression,
    ) -> Result<PushdownExpr, Error> {
        let compiled = pushdown::compile(&self.registry, &self.cache, root, expr)?;
        obs::metrics::record_predicate_compiled();

        Ok(compiled)
    }

    /// Compile a filter description into a callable row predicate.
    pub fn compile_in_memory(
        &self,
        root: &str,
        expr: &FilterExpression,
    ) -> Result<RowPredicate, Error> {
        let compiled = runtime::compile(&self.registry, &self.cache, root, expr)?;
        obs::metrics::record_predicate_compiled();

        Ok(compiled)
    }

    /// Register a filter over `entity`, running the abstract-navigation
    /// safety gate synchronously.
    pub fn register_filter(
        &self,
        entity: &str,
        kind: ProjectionKind,
        spec: &ProjectionExpr,
    ) -> Result<FilterHandle, Error> {
        Ok(plan::register_filter(&self.registry, entity, kind, spec)?)
    }

    /// Merge filter requirements into the caller-requested fetch shape.
    pub fn plan_fetch(
        &self,
        entity: &str,
        requested: &FieldProjectionInfo,
        filters: &[FilterHandle],
    ) -> Result<FieldProjectionInfo, PlanError> {
        plan::plan_fetch(&self.registry, entity, requested, filters)
    }
}

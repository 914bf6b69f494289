//! Module: plan::merge
//! Responsibility: fold filter-required reads into a caller-requested
//! fetch plan, one navigation hop deep by default.
//! Does not own: fetching; the merged plan is handed to the data-fetch
//! executor.
//! Boundary: pure one-shot fold, idempotent over the same inputs.
//! Unknown navigations and too-deep paths are skipped best-effort.

use crate::{
    model::{EntityModel, ModelRegistry},
    obs,
    plan::{FieldProjectionInfo, FilterHandle, NavigationPlan, PlanError},
    DEFAULT_MERGE_DEPTH,
};

/// Merge with the default one-hop navigation depth.
pub fn plan_fetch(
    registry: &ModelRegistry,
    entity: &str,
    requested: &FieldProjectionInfo,
    filters: &[FilterHandle],
) -> Result<FieldProjectionInfo, PlanError> {
    plan_fetch_with_depth(registry, entity, requested, filters, DEFAULT_MERGE_DEPTH)
}

/// Merge filter requirements into `requested` for `entity`.
///
/// Paths needing more than `max_depth` navigation hops are dropped;
/// raising the depth widens coverage without changing the algorithm.
pub fn plan_fetch_with_depth(
    registry: &ModelRegistry,
    entity: &str,
    requested: &FieldProjectionInfo,
    filters: &[FilterHandle],
    max_depth: usize,
) -> Result<FieldProjectionInfo, PlanError> {
    let model = registry
        .entity(entity)
        .ok_or_else(|| PlanError::UnknownEntity {
            entity: entity.to_string(),
        })?;

    let mut merged = requested.clone();

    for filter in filters {
        if !filter.entity.eq_ignore_ascii_case(entity) {
            continue;
        }

        for path in filter.required.iter() {
            let segments: Vec<&str> = path.split('.').collect();
            merge_path(registry, Some(model), &mut merged, &segments, max_depth);
        }
    }

    obs::metrics::record_plan_merged();

    Ok(merged)
}

fn merge_path(
    registry: &ModelRegistry,
    model: Option<&EntityModel>,
    node: &mut FieldProjectionInfo,
    segments: &[&str],
    depth: usize,
) {
    let [head, rest @ ..] = segments else {
        return;
    };

    if rest.is_empty() {
        merge_direct(model, node, head);
        return;
    }

    // Navigation-crossing path; dropped whole when the remaining hops
    // exceed the depth budget, so no partial plan is synthesized.
    if rest.len() > depth {
        return;
    }
    let Some(navigation) = model.and_then(|m| m.navigation(head)) else {
        return;
    };

    let target_model = registry.entity(&navigation.target_type).map(|m| &**m);

    if let Some(key) = node.navigation_key(&navigation.name) {
        // Caller already requested this relation; add only the required
        // leaf, leaving its sub-navigations untouched.
        if let Some(existing) = node.navigations.get_mut(&key) {
            merge_path(registry, target_model, &mut existing.projection, rest, depth - 1);
        }
        return;
    }

    // Filter-only dependency: minimal nested plan, no key columns. An
    // abstract target cannot be narrowly projected, so mark it for a
    // full related-record fetch.
    let mut projection = FieldProjectionInfo::new();
    merge_path(registry, target_model, &mut projection, rest, depth - 1);

    node.navigations.insert(
        navigation.name.clone(),
        NavigationPlan {
            target_type: navigation.target_type.clone(),
            is_collection: navigation.is_collection,
            projection,
            full_fetch: navigation.is_abstract_target,
        },
    );
}

// Direct field: skip anything already covered by the plan or always
// fetched anyway (keys), and anything that is a relation name.
fn merge_direct(model: Option<&EntityModel>, node: &mut FieldProjectionInfo, name: &str) {
    if node.has_scalar(name) {
        return;
    }
    if let Some(model) = model {
        if model.is_key_name(name) || model.navigation(name).is_some() {
            return;
        }
        if let Some(field) = model.field(name) {
            node.scalar_fields.insert(field.name.clone());
            return;
        }
    }

    node.scalar_fields.insert(name.to_string());
}

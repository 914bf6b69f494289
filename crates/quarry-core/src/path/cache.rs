//! Module: path::cache
//! Responsibility: append-only, process-lifetime cache of resolved
//! accessors keyed by (root entity, path text).
//! Does not own: resolution itself; misses resolve outside the lock.
//! Boundary: keys are casefolded so 'Person/Age' and 'person/age' share
//! one entry. Entries are never evicted or replaced.

use crate::{
    model::ModelRegistry,
    obs,
    path::{Accessor, FieldPath, PathError},
    value::casefold,
};
use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

///
/// AccessorCache
///
/// Shared across queries; reads take the read lock, a miss resolves with
/// no lock held and then publishes under the write lock. Concurrent misses
/// may resolve the same path twice; the first published entry wins and the
/// duplicate is discarded, so callers racing on one key still converge on
/// a single shared `Arc`.
///

#[derive(Debug, Default)]
pub struct AccessorCache {
    entries: RwLock<BTreeMap<(String, String), Arc<Accessor>>>,
}

impl AccessorCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or resolve the accessor for `path` rooted at `root`.
    pub fn resolve(
        &self,
        registry: &ModelRegistry,
        root: &str,
        path: &str,
    ) -> Result<Arc<Accessor>, PathError> {
        let key = (casefold(root), casefold(path));

        {
            let entries = self
                .entries
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(accessor) = entries.get(&key) {
                obs::metrics::record_cache_hit();
                return Ok(Arc::clone(accessor));
            }
        }

        obs::metrics::record_cache_miss();
        let parsed = FieldPath::parse(path)?;
        let accessor = Arc::new(Accessor::resolve(registry, root, &parsed)?);

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key).or_insert(accessor);

        Ok(Arc::clone(entry))
    }

    /// Number of distinct cached (root, path) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

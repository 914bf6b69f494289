//! Module: plan::shape
//! Responsibility: the planner's data shapes — required-path sets and the
//! recursive fetch-plan node.
//! Does not own: merge logic or registration.
//! Boundary: `RequiredFieldSet` membership is case-insensitive; plan
//! nodes keep declared casing.

use crate::value::casefold;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

///
/// RequiredFieldSet
///
/// Case-insensitive set of dotted field-path strings. First-seen casing
/// is kept for planner lookups and messages.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequiredFieldSet {
    paths: BTreeMap<String, String>,
}

impl RequiredFieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.paths.entry(casefold(&path)).or_insert(path);
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(&casefold(path))
    }

    /// Paths in first-seen casing, ordered by their folded form.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.paths.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RequiredFieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }

        set
    }
}

///
/// FieldProjectionInfo
///
/// Recursive fetch-plan node: which scalar fields and which related
/// records/fields must be retrieved.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldProjectionInfo {
    pub scalar_fields: BTreeSet<String>,
    pub navigations: BTreeMap<String, NavigationPlan>,
    /// Key columns to always fetch; `None` on synthesized filter-only
    /// nodes, which carry no keys.
    pub key_names: Option<BTreeSet<String>>,
}

impl FieldProjectionInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>) -> Self {
        self.scalar_fields.insert(name.into());
        self
    }

    #[must_use]
    pub fn with_key_names(mut self, names: &[&str]) -> Self {
        self.key_names = Some(names.iter().map(|n| (*n).to_string()).collect());
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, name: impl Into<String>, plan: NavigationPlan) -> Self {
        self.navigations.insert(name.into(), plan);
        self
    }

    #[must_use]
    pub fn has_scalar(&self, name: &str) -> bool {
        self.scalar_fields
            .iter()
            .any(|field| field.eq_ignore_ascii_case(name))
    }

    /// Existing navigation map key matching `name` case-insensitively.
    #[must_use]
    pub fn navigation_key(&self, name: &str) -> Option<String> {
        self.navigations
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
    }
}

///
/// NavigationPlan
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavigationPlan {
    pub target_type: String,
    pub is_collection: bool,
    pub projection: FieldProjectionInfo,
    /// Fetch the whole related record instead of a narrow projection.
    /// Set on filter-only dependencies through abstract-target relations.
    pub full_fetch: bool,
}

#[cfg(test)]
mod tests {
    use super::RequiredFieldSet;

    #[test]
    fn membership_ignores_case_and_keeps_first_seen_text() {
        let mut set = RequiredFieldSet::new();
        set.insert("Company.Name");
        set.insert("COMPANY.NAME");

        assert_eq!(set.len(), 1);
        assert!(set.contains("company.name"));
        assert_eq!(set.iter().next().map(String::as_str), Some("Company.Name"));
    }
}

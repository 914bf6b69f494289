//! Module: path::accessor
//! Responsibility: resolve parsed paths against entity models into reusable
//! accessors.
//! Does not own: path text parsing or cache publication.
//! Boundary: predicate compilation consumes accessors; member names are
//! resolved once here and never re-looked-up during evaluation.

use crate::{
    model::{FieldType, ModelRegistry},
    path::{FieldPath, PathError, PathSegment},
    traits::{Record, Related},
    value::Value,
};
use std::{fmt, sync::Arc};

/// Value-retrieval function from a record to the resolved field's value.
pub type Getter = Arc<dyn Fn(&dyn Record) -> Option<Value> + Send + Sync>;

///
/// Accessor
///
/// Immutable resolution of one path against one root entity. Built once,
/// published to the cache, and reused for process lifetime.
///

#[derive(Clone, Debug)]
pub struct Accessor {
    /// Original path text, casing preserved for diagnostics.
    pub raw: String,
    pub shape: AccessorShape,
}

///
/// AccessorShape
///

#[derive(Clone, Debug)]
pub enum AccessorShape {
    /// Path terminates at a scalar field.
    Scalar(ScalarAccessor),
    /// Path terminates at a to-many relation with a bracketed sub-path;
    /// predicates over it are existential tests over the elements.
    Existential(ExistentialAccessor),
}

///
/// ScalarAccessor
///
/// The accessor triple: value-retrieval function, resolved field type, and
/// the declared-casing member chain used to compose push-down predicates.
///

#[derive(Clone)]
pub struct ScalarAccessor {
    pub getter: Getter,
    pub field_type: FieldType,
    pub field_ref: Vec<String>,
}

impl fmt::Debug for ScalarAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarAccessor")
            .field("field_type", &self.field_type)
            .field("field_ref", &self.field_ref)
            .finish_non_exhaustive()
    }
}

///
/// ExistentialAccessor
///

#[derive(Clone, Debug)]
pub struct ExistentialAccessor {
    /// Declared-casing navigation chain ending at the to-many relation.
    pub navigations: Vec<String>,
    /// Element entity of the to-many relation.
    pub element_entity: String,
    /// Bracketed sub-path text, resolved recursively at compile time.
    pub sub_path: String,
}

impl Accessor {
    /// Resolve one parsed path against a root entity.
    ///
    /// Plain segments chain member accesses: intermediates must be to-one
    /// relations, the terminal a scalar field. A list segment ends the
    /// path and defers its sub-path to the element entity.
    pub(crate) fn resolve(
        registry: &ModelRegistry,
        root: &str,
        path: &FieldPath,
    ) -> Result<Self, PathError> {
        let mut model = registry
            .entity(root)
            .ok_or_else(|| PathError::UnknownEntity {
                entity: root.to_string(),
            })?
            .clone();
        let mut navigations: Vec<String> = Vec::new();

        for (index, segment) in path.segments.iter().enumerate() {
            let terminal = index + 1 == path.segments.len();

            match segment {
                PathSegment::Member(name) if terminal => {
                    if let Some(field) = model.field(name) {
                        let mut field_ref = navigations.clone();
                        field_ref.push(field.name.clone());

                        return Ok(Self {
                            raw: path.raw.clone(),
                            shape: AccessorShape::Scalar(ScalarAccessor {
                                getter: make_getter(navigations, field.name.clone()),
                                field_type: field.field_type(),
                                field_ref,
                            }),
                        });
                    }

                    return Err(match model.navigation(name) {
                        Some(navigation) if navigation.is_collection => {
                            PathError::CollectionWithoutBracket {
                                entity: model.entity_name.clone(),
                                segment: name.clone(),
                            }
                        }
                        Some(_) => PathError::TerminalNavigation {
                            entity: model.entity_name.clone(),
                            segment: name.clone(),
                        },
                        None => PathError::UnknownMember {
                            entity: model.entity_name.clone(),
                            segment: name.clone(),
                        },
                    });
                }
                PathSegment::Member(name) => {
                    let navigation = model.navigation(name).ok_or_else(|| {
                        if model.field(name).is_some() {
                            PathError::NotANavigation {
                                entity: model.entity_name.clone(),
                                segment: name.clone(),
                            }
                        } else {
                            PathError::UnknownMember {
                                entity: model.entity_name.clone(),
                                segment: name.clone(),
                            }
                        }
                    })?;

                    if navigation.is_collection {
                        return Err(PathError::CollectionWithoutBracket {
                            entity: model.entity_name.clone(),
                            segment: name.clone(),
                        });
                    }

                    navigations.push(navigation.name.clone());
                    let target = navigation.target_type.clone();
                    model = registry
                        .entity(&target)
                        .ok_or(PathError::UnknownEntity { entity: target })?
                        .clone();
                }
                PathSegment::List { member, sub } => {
                    let navigation = model.navigation(member).ok_or_else(|| {
                        if model.field(member).is_some() {
                            PathError::NotANavigation {
                                entity: model.entity_name.clone(),
                                segment: member.clone(),
                            }
                        } else {
                            PathError::UnknownMember {
                                entity: model.entity_name.clone(),
                                segment: member.clone(),
                            }
                        }
                    })?;

                    if !navigation.is_collection {
                        return Err(PathError::NotACollection {
                            entity: model.entity_name.clone(),
                            segment: member.clone(),
                        });
                    }

                    navigations.push(navigation.name.clone());

                    return Ok(Self {
                        raw: path.raw.clone(),
                        shape: AccessorShape::Existential(ExistentialAccessor {
                            navigations,
                            element_entity: navigation.target_type.clone(),
                            sub_path: sub.raw.clone(),
                        }),
                    });
                }
            }
        }

        // A parsed path always has at least one segment; zero segments can
        // only mean the parser was bypassed.
        Err(PathError::EmptyPath {
            path: path.raw.clone(),
        })
    }
}

// Walk to-one navigations, then read the terminal field. A broken chain
// (missing relation, or an unexpectedly to-many hop) reads as absent.
fn make_getter(navigations: Vec<String>, field: String) -> Getter {
    Arc::new(move |record: &dyn Record| {
        let mut current: &dyn Record = record;
        for navigation in &navigations {
            current = match current.related(navigation) {
                Related::One(next) => next,
                Related::None | Related::Many(_) => return None,
            };
        }

        current.field(&field)
    })
}

#[cfg(test)]
mod tests {
    use super::{Accessor, AccessorShape};
    use crate::{
        path::{FieldPath, PathError},
        test_support::{person, test_registry},
        value::Value,
    };

    fn resolve(root: &str, path: &str) -> Result<Accessor, PathError> {
        let parsed = FieldPath::parse(path)?;
        Accessor::resolve(&test_registry(), root, &parsed)
    }

    #[test]
    fn resolves_direct_field_with_declared_casing() {
        let accessor = resolve("Person", "age").unwrap();

        let AccessorShape::Scalar(scalar) = &accessor.shape else {
            panic!("expected scalar accessor");
        };
        assert_eq!(scalar.field_ref, vec!["Age".to_string()]);
        assert_eq!(accessor.raw, "age");
    }

    #[test]
    fn getter_walks_to_one_navigations() {
        let accessor = resolve("Person", "Company.Name").unwrap();
        let AccessorShape::Scalar(scalar) = &accessor.shape else {
            panic!("expected scalar accessor");
        };

        let record = person("Ada", 36).with_one(
            "Company",
            crate::test_support::company("Initech"),
        );

        assert_eq!(
            (scalar.getter)(&record),
            Some(Value::Text("Initech".to_string()))
        );

        // Missing relation reads as absent.
        let lonely = person("Bob", 20);
        assert_eq!((scalar.getter)(&lonely), None);
    }

    #[test]
    fn bracketed_path_resolves_to_existential_shape() {
        let accessor = resolve("Company", "Employees[Age]").unwrap();

        let AccessorShape::Existential(exist) = &accessor.shape else {
            panic!("expected existential accessor");
        };
        assert_eq!(exist.navigations, vec!["Employees".to_string()]);
        assert_eq!(exist.element_entity, "Person");
        assert_eq!(exist.sub_path, "Age");
    }

    #[test]
    fn unknown_member_names_the_offending_segment() {
        let err = resolve("Person", "Company.Revenue").unwrap_err();

        assert_eq!(
            err,
            PathError::UnknownMember {
                entity: "Company".to_string(),
                segment: "Revenue".to_string(),
            }
        );
    }

    #[test]
    fn collection_navigation_requires_brackets() {
        let err = resolve("Company", "Employees.Age").unwrap_err();

        assert!(matches!(err, PathError::CollectionWithoutBracket { .. }));
    }

    #[test]
    fn scalar_member_cannot_be_traversed() {
        let err = resolve("Person", "Name.Length").unwrap_err();

        assert!(matches!(err, PathError::NotANavigation { .. }));
    }

    #[test]
    fn terminal_to_one_navigation_is_rejected() {
        let err = resolve("Person", "Company").unwrap_err();

        assert!(matches!(err, PathError::TerminalNavigation { .. }));
    }
}

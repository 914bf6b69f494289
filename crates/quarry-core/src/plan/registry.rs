//! Module: plan::registry
//! Responsibility: filter registration — run the requirement analyzer
//! once, apply the abstract-navigation safety gate, and hand back an
//! immutable handle.
//! Does not own: merging; handles are consumed by `plan::merge` on every
//! query.
//! Boundary: the gate runs here, at registration time, so an unsafe
//! filter definition fails before any query uses it.

use crate::{
    model::ModelRegistry,
    plan::RequiredFieldSet,
    projection::{required_paths, ProjectionExpr},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

///
/// ProjectionKind
///
/// How a filter reads its entity: `Identity` reads the raw record
/// directly; `Narrow` reads only a pre-extracted shape.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ProjectionKind {
    Identity,
    Narrow,
}

///
/// FilterHandle
///
/// Immutable result of registration, built once at setup and reused by
/// every subsequent query.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterHandle {
    pub entity: String,
    pub kind: ProjectionKind,
    pub required: RequiredFieldSet,
}

///
/// RegisterError
///

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegisterError {
    #[error("unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    #[error(
        "filter on entity '{entity}' reads through abstract navigation '{navigation}'; \
         an identity projection cannot safely cross a polymorphic relation"
    )]
    UnsafeIdentityProjection { entity: String, navigation: String },
}

/// Analyze `spec` and register a filter over `entity`.
///
/// An identity-kind filter whose requirements cross an abstract-target
/// navigation is refused outright; allowing it would silently force an
/// unbounded full fetch on every query.
pub fn register_filter(
    registry: &ModelRegistry,
    entity: &str,
    kind: ProjectionKind,
    spec: &ProjectionExpr,
) -> Result<FilterHandle, RegisterError> {
    let model = registry
        .entity(entity)
        .ok_or_else(|| RegisterError::UnknownEntity {
            entity: entity.to_string(),
        })?;

    let required = required_paths(spec);

    if kind == ProjectionKind::Identity {
        for path in required.iter() {
            let Some((head, _)) = path.split_once('.') else {
                continue;
            };

            if let Some(navigation) = model.navigation(head) {
                if navigation.is_abstract_target {
                    return Err(RegisterError::UnsafeIdentityProjection {
                        entity: model.entity_name.clone(),
                        navigation: navigation.name.clone(),
                    });
                }
            }
        }
    }

    Ok(FilterHandle {
        entity: model.entity_name.clone(),
        kind,
        required,
    })
}

#[cfg(test)]
mod tests {
    use super::{register_filter, ProjectionKind, RegisterError};
    use crate::{projection::ProjectionExpr, test_support::test_registry};

    #[test]
    fn registration_captures_the_analyzed_paths() {
        let spec = ProjectionExpr::shape(vec![
            ("name", ProjectionExpr::Parameter.member("Name")),
            (
                "employer",
                ProjectionExpr::Parameter.member("Company").member("Name"),
            ),
        ]);

        let handle =
            register_filter(&test_registry(), "Person", ProjectionKind::Narrow, &spec).unwrap();

        assert_eq!(handle.entity, "Person");
        assert!(handle.required.contains("Name"));
        assert!(handle.required.contains("Company.Name"));
    }

    #[test]
    fn identity_filter_through_abstract_navigation_is_refused() {
        let spec = ProjectionExpr::Parameter.member("Assets").member("Id");

        let err = register_filter(&test_registry(), "Company", ProjectionKind::Identity, &spec)
            .unwrap_err();

        assert_eq!(
            err,
            RegisterError::UnsafeIdentityProjection {
                entity: "Company".to_string(),
                navigation: "Assets".to_string(),
            }
        );
    }

    #[test]
    fn narrow_filter_may_cross_an_abstract_navigation() {
        let spec = ProjectionExpr::Parameter.member("Assets").member("Id");

        let handle =
            register_filter(&test_registry(), "Company", ProjectionKind::Narrow, &spec).unwrap();

        assert!(handle.required.contains("Assets.Id"));
    }

    #[test]
    fn identity_filter_with_direct_reads_is_fine() {
        let spec = ProjectionExpr::Parameter.member("Name");

        let handle =
            register_filter(&test_registry(), "Company", ProjectionKind::Identity, &spec).unwrap();

        assert_eq!(handle.kind, ProjectionKind::Identity);
    }

    #[test]
    fn unknown_entity_is_reported() {
        let err = register_filter(
            &test_registry(),
            "Ghost",
            ProjectionKind::Narrow,
            &ProjectionExpr::Parameter,
        )
        .unwrap_err();

        assert!(matches!(err, RegisterError::UnknownEntity { .. }));
    }
}

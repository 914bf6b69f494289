//! Module: projection::analyze
//! Responsibility: collect every member-access chain a projection
//! specification reads from its input parameter.
//! Does not own: what the paths *mean*; multi-hop paths through
//! collections are recorded as-is for the planner to interpret.
//! Boundary: casts are transparent — a chain through a narrowing is
//! still rooted at the original parameter.

use crate::{plan::RequiredFieldSet, projection::ProjectionExpr};

/// Extract the set of dotted field paths `spec` reads from its input.
#[must_use]
pub fn required_paths(spec: &ProjectionExpr) -> RequiredFieldSet {
    let mut required = RequiredFieldSet::new();
    walk(spec, &mut required);

    required
}

fn walk(expr: &ProjectionExpr, required: &mut RequiredFieldSet) {
    match expr {
        ProjectionExpr::Parameter | ProjectionExpr::Constant => {}
        ProjectionExpr::Member { base, .. } => {
            if let Some(segments) = member_chain(expr) {
                required.insert(segments.join("."));
            } else {
                // Member of a non-parameter base (a call result, say);
                // only the base can read the parameter.
                walk(base, required);
            }
        }
        ProjectionExpr::Cast { base, .. } => walk(base, required),
        ProjectionExpr::Shape { bindings } => {
            for (_, bound) in bindings {
                walk(bound, required);
            }
        }
        ProjectionExpr::Call { args, .. } => {
            for arg in args {
                walk(arg, required);
            }
        }
    }
}

// The member chain down to the parameter, if this expression is one.
// Casts are skipped without breaking the chain.
fn member_chain(expr: &ProjectionExpr) -> Option<Vec<&str>> {
    match expr {
        ProjectionExpr::Parameter => Some(Vec::new()),
        ProjectionExpr::Cast { base, .. } => member_chain(base),
        ProjectionExpr::Member { base, name } => {
            let mut segments = member_chain(base)?;
            segments.push(name.as_str());
            Some(segments)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::required_paths;
    use crate::projection::ProjectionExpr;

    fn paths(spec: &ProjectionExpr) -> Vec<String> {
        required_paths(spec).iter().cloned().collect()
    }

    #[test]
    fn shape_collects_every_bound_chain() {
        let spec = ProjectionExpr::shape(vec![
            ("name", ProjectionExpr::Parameter.member("Name")),
            (
                "employer",
                ProjectionExpr::Parameter.member("Company").member("Name"),
            ),
        ]);

        assert_eq!(paths(&spec), vec!["Company.Name", "Name"]);
    }

    #[test]
    fn cast_is_transparent_to_the_recorded_path() {
        let spec = ProjectionExpr::Parameter
            .cast("Auditable")
            .member("ModifiedAt");

        assert_eq!(paths(&spec), vec!["ModifiedAt"]);
    }

    #[test]
    fn cast_inside_a_chain_does_not_break_rooting() {
        let spec = ProjectionExpr::Parameter
            .member("Company")
            .cast("PublicCompany")
            .member("Ticker");

        assert_eq!(paths(&spec), vec!["Company.Ticker"]);
    }

    #[test]
    fn call_arguments_are_walked_but_calls_root_nothing() {
        let spec = ProjectionExpr::call(
            "concat",
            vec![
                ProjectionExpr::Parameter.member("Name"),
                ProjectionExpr::Constant,
            ],
        )
        .member("Length");

        // "Length" hangs off the call result, not the parameter.
        assert_eq!(paths(&spec), vec!["Name"]);
    }

    #[test]
    fn collection_hops_are_recorded_as_is() {
        let spec = ProjectionExpr::Parameter
            .member("Employees")
            .member("Name");

        assert_eq!(paths(&spec), vec!["Employees.Name"]);
    }

    #[test]
    fn duplicate_chains_differing_in_case_collapse() {
        let spec = ProjectionExpr::shape(vec![
            ("a", ProjectionExpr::Parameter.member("Name")),
            ("b", ProjectionExpr::Parameter.member("name")),
        ]);

        assert_eq!(paths(&spec).len(), 1);
    }
}

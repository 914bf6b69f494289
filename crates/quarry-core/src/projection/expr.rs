//! Module: projection::expr
//! Responsibility: the abstract shape of a projection specification —
//! "given one record, produce some derived shape".
//! Does not own: analysis; see `projection::analyze`.
//! Boundary: this AST describes structure only. It is never evaluated.

///
/// ProjectionExpr
///
/// One node of a projection specification. `Parameter` is the single
/// input record; everything else is built over it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectionExpr {
    /// The specification's input record.
    Parameter,
    /// Member access on a base expression.
    Member {
        base: Box<ProjectionExpr>,
        name: String,
    },
    /// Type-narrowing reinterpretation of the base. Changes which
    /// declared members are reachable, not what path is recorded.
    Cast {
        base: Box<ProjectionExpr>,
        target_type: String,
    },
    /// A constructed output shape binding names to sub-expressions.
    Shape {
        bindings: Vec<(String, ProjectionExpr)>,
    },
    /// An opaque call; its arguments are walked, its result is not a
    /// member-chain root.
    Call {
        name: String,
        args: Vec<ProjectionExpr>,
    },
    /// A literal; reads nothing.
    Constant,
}

impl ProjectionExpr {
    /// Read a member of this expression.
    #[must_use]
    pub fn member(self, name: impl Into<String>) -> Self {
        Self::Member {
            base: Box::new(self),
            name: name.into(),
        }
    }

    /// Narrow this expression to `target_type`.
    #[must_use]
    pub fn cast(self, target_type: impl Into<String>) -> Self {
        Self::Cast {
            base: Box::new(self),
            target_type: target_type.into(),
        }
    }

    #[must_use]
    pub fn shape(bindings: Vec<(&str, ProjectionExpr)>) -> Self {
        Self::Shape {
            bindings: bindings
                .into_iter()
                .map(|(name, expr)| (name.to_string(), expr))
                .collect(),
        }
    }

    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<ProjectionExpr>) -> Self {
        Self::Call {
            name: name.into(),
            args,
        }
    }
}

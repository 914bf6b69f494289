//! Module: predicate::model
//! Responsibility: the filter description vocabulary — comparators,
//! connectors, and the composable `FilterExpression` tree.
//! Does not own: legality, conversion, or either compiler.
//! Boundary: this is the wire-adjacent input shape; everything here is
//! serde-derived and free of resolved types.

use crate::value::TextMode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Comparator
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Comparator {
    #[default]
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    StartsWith,
    EndsWith,
    Like,
    In,
    NotIn,
}

impl Comparator {
    /// Membership comparators take zero or more operands; everything else
    /// takes exactly one.
    #[must_use]
    pub const fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual
        )
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::Contains => "Contains",
            Self::StartsWith => "StartsWith",
            Self::EndsWith => "EndsWith",
            Self::Like => "Like",
            Self::In => "In",
            Self::NotIn => "NotIn",
        };

        write!(f, "{name}")
    }
}

///
/// Connector
///
/// How the child *after* this one joins the accumulated result; the
/// last child's connector is never consulted.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Connector {
    #[default]
    And,
    Or,
}

///
/// FilterExpression
///
/// One condition, or a group of children. A node with children ignores
/// its own path/comparator/operands and folds its children left to
/// right; each join uses the connector of the child *before* the one
/// being joined. There is no operator precedence: child connectors
/// `(Or, And, _)` fold as `(first Or second) And third`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterExpression {
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub comparator: Comparator,

    /// Operand text; `None` is a null operand.
    #[serde(default)]
    pub operands: Vec<Option<String>>,

    /// Optional case handling for textual comparison; absent means
    /// case-sensitive.
    #[serde(default)]
    pub text_mode: Option<TextMode>,

    #[serde(default)]
    pub children: Vec<FilterExpression>,

    #[serde(default)]
    pub connector: Connector,
}

impl FilterExpression {
    /// Single condition on one path.
    #[must_use]
    pub fn condition(
        path: impl Into<String>,
        comparator: Comparator,
        operands: Vec<Option<String>>,
    ) -> Self {
        Self {
            path: path.into(),
            comparator,
            operands,
            ..Self::default()
        }
    }

    /// Group node folding its children.
    #[must_use]
    pub fn group(children: Vec<FilterExpression>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Non-null operand text helper for fixture-heavy tests and callers.
#[must_use]
pub fn operands(texts: &[&str]) -> Vec<Option<String>> {
    texts.iter().map(|text| Some((*text).to_string())).collect()
}

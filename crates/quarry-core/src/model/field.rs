use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// FieldKind
///
/// Runtime type shape of a scalar entity field. This is deliberately
/// *smaller* than any full schema type system and exists only to support:
/// - operand conversion
/// - comparator legality
/// - comparison semantics
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Text,
    Uuid,
    Timestamp,
    Enum { variants: Vec<String> },
}

impl FieldKind {
    /// Comparator-legality classification of the kind.
    #[must_use]
    pub const fn class(&self) -> FieldClass {
        match self {
            Self::Text => FieldClass::Text,
            _ => FieldClass::Other,
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int => write!(f, "Int"),
            Self::Uint => write!(f, "Uint"),
            Self::Float => write!(f, "Float"),
            Self::Text => write!(f, "Text"),
            Self::Uuid => write!(f, "Uuid"),
            Self::Timestamp => write!(f, "Timestamp"),
            Self::Enum { .. } => write!(f, "Enum"),
        }
    }
}

///
/// FieldClass
///
/// Legality classification: text fields admit substring and pattern
/// operators, everything else admits ordering and typed membership.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldClass {
    Text,
    Other,
}

///
/// FieldType
///
/// Resolved type of a path target: scalar kind plus nullability.
/// Nullability lives on the field, not the kind.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldType {
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldType {
    #[must_use]
    pub const fn new(kind: FieldKind, nullable: bool) -> Self {
        Self { kind, nullable }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

///
/// FieldModel
///
/// Runtime field metadata used by path resolution and legality checks.
///

#[derive(Clone, Debug)]
pub struct FieldModel {
    /// Field name as used in paths and filter expressions.
    pub name: String,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldModel {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: true,
        }
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        FieldType::new(self.kind.clone(), self.nullable)
    }
}

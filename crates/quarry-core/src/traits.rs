//! Behavioral traits implemented by caller record types.

use crate::value::Value;

///
/// Record
///
/// Runtime view of one typed record: scalar fields by name, related records
/// by navigation name. In-memory predicate evaluation is defined entirely
/// against this surface; the engine never sees concrete record types.
///
/// Accessors call with the model's declared casing, so implementations may
/// match names exactly.
///

pub trait Record {
    /// Read one scalar field. `None` means the field is missing on this
    /// record; an explicit null is `Some(Value::Null)`.
    fn field(&self, name: &str) -> Option<Value>;

    /// Follow one navigation to related records.
    fn related(&self, _navigation: &str) -> Related<'_> {
        Related::None
    }
}

///
/// Related
///
/// Result of following one navigation from a record.
///

pub enum Related<'a> {
    None,
    One(&'a dyn Record),
    Many(Vec<&'a dyn Record>),
}

impl<'a> Related<'a> {
    /// Flatten into the set of reachable records.
    #[must_use]
    pub fn records(self) -> Vec<&'a dyn Record> {
        match self {
            Self::None => Vec::new(),
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}

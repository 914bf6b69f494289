//! Module: path::parse
//! Responsibility: path text to segment structure.
//! Does not own: member resolution against entity models.
//! Boundary: the accessor cache parses each distinct path text once.

use crate::path::PathError;
use derive_more::Deref;

///
/// FieldPath
///
/// Derefs to its segment list.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct FieldPath {
    /// Original path text, casing preserved.
    pub raw: String,
    #[deref]
    pub segments: Vec<PathSegment>,
}

///
/// PathSegment
///
/// A list segment must be the last segment of its level; its bracketed
/// contents are a recursive sub-path over the relation's element type.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Member(String),
    List { member: String, sub: Box<FieldPath> },
}

impl FieldPath {
    /// Parse path text: segments split on `.` outside of one optional
    /// bracket pair.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath {
                path: text.to_string(),
            });
        }

        let pieces = split_top_level(trimmed).ok_or_else(|| PathError::UnbalancedBracket {
            path: text.to_string(),
        })?;

        let mut segments = Vec::with_capacity(pieces.len());
        for (index, piece) in pieces.iter().enumerate() {
            if piece.is_empty() {
                return Err(PathError::EmptySegment {
                    path: text.to_string(),
                });
            }

            let Some(open) = piece.find('[') else {
                if piece.contains(']') {
                    return Err(PathError::UnbalancedBracket {
                        path: text.to_string(),
                    });
                }
                segments.push(PathSegment::Member((*piece).to_string()));
                continue;
            };

            if index + 1 != pieces.len() {
                return Err(PathError::TrailingAfterListSegment {
                    path: text.to_string(),
                });
            }
            if !piece.ends_with(']') {
                return Err(PathError::UnbalancedBracket {
                    path: text.to_string(),
                });
            }

            let member = &piece[..open];
            if member.is_empty() {
                return Err(PathError::EmptySegment {
                    path: text.to_string(),
                });
            }

            let inner = &piece[open + 1..piece.len() - 1];
            let sub = Self::parse(inner)?;
            segments.push(PathSegment::List {
                member: member.to_string(),
                sub: Box::new(sub),
            });
        }

        Ok(Self {
            raw: text.to_string(),
            segments,
        })
    }
}

// Split on `.` at bracket depth zero; `None` on unbalanced brackets.
fn split_top_level(text: &str) -> Option<Vec<&str>> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (offset, ch) in text.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            '.' if depth == 0 => {
                pieces.push(&text[start..offset]);
                start = offset + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    pieces.push(&text[start..]);

    Some(pieces)
}

#[cfg(test)]
mod tests {
    use super::{FieldPath, PathSegment};
    use crate::path::PathError;

    fn member(name: &str) -> PathSegment {
        PathSegment::Member(name.to_string())
    }

    #[test]
    fn parses_single_member() {
        let path = FieldPath::parse("Age").unwrap();

        assert_eq!(path.segments, vec![member("Age")]);
        assert_eq!(path.raw, "Age");
    }

    #[test]
    fn parses_dotted_chain() {
        let path = FieldPath::parse("Parent.Company.Name").unwrap();

        assert_eq!(
            path.segments,
            vec![member("Parent"), member("Company"), member("Name")]
        );
    }

    #[test]
    fn parses_list_segment_with_sub_path() {
        let path = FieldPath::parse("Employees[Age]").unwrap();

        let [PathSegment::List { member, sub }] = path.segments.as_slice() else {
            panic!("expected one list segment, got {:?}", path.segments);
        };
        assert_eq!(member, "Employees");
        assert_eq!(sub.segments, vec![super::PathSegment::Member("Age".to_string())]);
    }

    #[test]
    fn parses_nested_list_segments() {
        let path = FieldPath::parse("Departments[Employees[Age]]").unwrap();

        let [PathSegment::List { member, sub }] = path.segments.as_slice() else {
            panic!("expected one list segment");
        };
        assert_eq!(member, "Departments");
        let [PathSegment::List { member: inner, sub: inner_sub }] = sub.segments.as_slice() else {
            panic!("expected nested list segment");
        };
        assert_eq!(inner, "Employees");
        assert_eq!(inner_sub.segments, vec![super::PathSegment::Member("Age".to_string())]);
    }

    #[test]
    fn parses_prefix_navigation_before_list_segment() {
        let path = FieldPath::parse("Company.Employees[Name]").unwrap();

        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[0], member("Company"));
        assert!(matches!(&path.segments[1], PathSegment::List { .. }));
    }

    #[test]
    fn rejects_empty_path_and_segments() {
        assert!(matches!(
            FieldPath::parse("   "),
            Err(PathError::EmptyPath { .. })
        ));
        assert!(matches!(
            FieldPath::parse("A..B"),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(matches!(
            FieldPath::parse("[Name]"),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        assert!(matches!(
            FieldPath::parse("Employees[Age"),
            Err(PathError::UnbalancedBracket { .. })
        ));
        assert!(matches!(
            FieldPath::parse("Employees]Age"),
            Err(PathError::UnbalancedBracket { .. })
        ));
    }

    #[test]
    fn rejects_segments_after_a_list_segment() {
        assert!(matches!(
            FieldPath::parse("Employees[Age].Name"),
            Err(PathError::TrailingAfterListSegment { .. })
        ));
    }
}

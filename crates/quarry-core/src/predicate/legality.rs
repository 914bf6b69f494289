//! Module: predicate::legality
//! Responsibility: static comparator-legality table shared by both
//! compiler flavors.
//! Does not own: flavor feature coverage; `Like` is *legal* on text in
//! both flavors and only *unimplemented* in memory.
//! Boundary: legality is decided from (comparator, field class, whether a
//! text mode was supplied) and nothing else.

use crate::{
    model::{FieldClass, FieldType},
    predicate::{Comparator, LegalityError},
};

///
/// Rule
///
/// One comparator's legality per field class, plus whether a supplied
/// text-comparison mode is honored.
///

struct Rule {
    comparator: Comparator,
    text: bool,
    other: bool,
    honors_text_mode: bool,
}

const fn rule(comparator: Comparator, text: bool, other: bool, honors_text_mode: bool) -> Rule {
    Rule {
        comparator,
        text,
        other,
        honors_text_mode,
    }
}

#[rustfmt::skip]
const LEGALITY_TABLE: &[Rule] = &[
    //   comparator                      text   other  mode
    rule(Comparator::Equal,              true,  true,  true),
    rule(Comparator::NotEqual,           true,  true,  true),
    rule(Comparator::GreaterThan,        false, true,  false),
    rule(Comparator::GreaterThanOrEqual, false, true,  false),
    rule(Comparator::LessThan,           false, true,  false),
    rule(Comparator::LessThanOrEqual,    false, true,  false),
    rule(Comparator::Contains,           true,  false, true),
    rule(Comparator::StartsWith,         true,  false, true),
    rule(Comparator::EndsWith,           true,  false, true),
    rule(Comparator::Like,               true,  false, false),
    rule(Comparator::In,                 true,  true,  true),
    rule(Comparator::NotIn,              true,  true,  true),
];

/// Check one (comparator, resolved type, mode-supplied) combination.
///
/// Both flavors call this with identical inputs, so push-down and
/// in-memory behavior never diverge on legality.
pub(crate) fn check(
    comparator: Comparator,
    field_type: &FieldType,
    mode_supplied: bool,
) -> Result<(), LegalityError> {
    let class = field_type.kind.class();

    let Some(entry) = LEGALITY_TABLE
        .iter()
        .find(|entry| entry.comparator == comparator)
    else {
        return Err(LegalityError::IllegalComparator {
            comparator,
            field_type: field_type.clone(),
        });
    };

    let legal = match class {
        FieldClass::Text => entry.text,
        FieldClass::Other => entry.other,
    };
    if !legal {
        return Err(LegalityError::IllegalComparator {
            comparator,
            field_type: field_type.clone(),
        });
    }

    if mode_supplied && (class == FieldClass::Other || !entry.honors_text_mode) {
        return Err(LegalityError::ModeOnNonText {
            field_type: field_type.clone(),
        });
    }

    Ok(())
}

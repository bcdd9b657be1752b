//! Membership and truthiness queries.

use crate::relation::is_equal;
use crate::shape::{Literal, Sequence, Shape};

/// Returns `true` if some element is strictly equal to `target`.
///
/// Elements are compared left to right with [`is_equal`], which never
/// coerces: `1` does not match `number`, `true` does not match `boolean`.
/// The scan stops at the first match.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::{Primitive, Shape};
///
/// assert!(sequence::includes(&sequence![1, 2, 3], &Shape::from(2)));
/// assert!(!sequence::includes(&sequence![], &Shape::from(1)));
/// assert!(!sequence::includes(
///     &sequence![Shape::Primitive(Primitive::Boolean)],
///     &Shape::from(true)
/// ));
/// ```
#[must_use]
pub fn includes(sequence: &Sequence, target: &Shape) -> bool {
    let mut remaining = sequence.as_slice();
    while let [head, rest @ ..] = remaining {
        if is_equal(head, target) {
            return true;
        }
        remaining = rest;
    }
    trace_event!(length = sequence.len(), "target not included");
    false
}

/// Returns `true` if `shape` is one of the falsy shapes.
///
/// The falsy shapes are `false`, `0`, `""`, `null`, `undefined`, the empty
/// sequence and the empty record.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::{Record, Shape};
///
/// assert!(sequence::is_falsy(&Shape::from(0)));
/// assert!(sequence::is_falsy(&Shape::Record(Record::new())));
/// assert!(!sequence::is_falsy(&Shape::from("0")));
/// ```
#[must_use]
pub fn is_falsy(shape: &Shape) -> bool {
    match shape {
        Shape::Literal(Literal::Boolean(value)) => !value,
        Shape::Literal(Literal::Number(value)) => *value == 0,
        Shape::Literal(Literal::String(text)) => text.is_empty(),
        Shape::Null | Shape::Undefined => true,
        Shape::Sequence(sequence) => sequence.is_empty(),
        Shape::Record(record) => record.is_empty(),
        _ => false,
    }
}

/// Returns `true` if any element is not falsy.
///
/// An empty sequence yields `false`.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
///
/// assert!(sequence::any_of(&sequence![0, "", false, sequence![1]]));
/// assert!(!sequence::any_of(&sequence![0, "", false, sequence![]]));
/// assert!(!sequence::any_of(&sequence![]));
/// ```
#[must_use]
pub fn any_of(sequence: &Sequence) -> bool {
    sequence.iter().any(|element| !is_falsy(element))
}

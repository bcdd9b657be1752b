//! Conversions from sequences into unions and records.

use crate::error::ShapeError;
use crate::shape::{Field, Literal, Record, Sequence, Shape};

/// Returns the union of all elements.
///
/// An empty sequence yields [`Shape::Never`].
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// assert_eq!(
///     sequence::tuple_to_union(&sequence!["a", "b", "a"]),
///     Shape::union([Shape::from("a"), Shape::from("b")])
/// );
/// assert_eq!(sequence::tuple_to_union(&sequence![]), Shape::Never);
/// ```
#[must_use]
pub fn tuple_to_union(sequence: &Sequence) -> Shape {
    Shape::union(sequence.iter().cloned())
}

/// Builds a record mapping every element to itself.
///
/// Each element must be a string or number literal; numbers are keyed by
/// their decimal form.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidKey`] for the first element that is not a
/// string or number literal.
///
/// # Examples
///
/// ```rust
/// use shapewright::{record, sequence};
///
/// let object = sequence::tuple_to_object(&sequence!["tesla", "model 3", 1]).unwrap();
/// assert_eq!(object, record! { "tesla" => "tesla", "model 3" => "model 3", "1" => 1 });
///
/// assert!(sequence::tuple_to_object(&sequence![sequence![]]).is_err());
/// ```
pub fn tuple_to_object(sequence: &Sequence) -> Result<Record, ShapeError> {
    sequence
        .iter()
        .map(|element| match element {
            Shape::Literal(literal @ (Literal::String(_) | Literal::Number(_))) => {
                Ok(Field::new(literal.to_text(), element.clone()))
            }
            other => Err(ShapeError::InvalidKey {
                found: other.kind(),
            }),
        })
        .collect()
}

/// Builds nested records along the path given by the elements, with `leaf`
/// at the innermost position.
///
/// An empty path yields `leaf` itself.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidKey`] if an element is not a string literal.
///
/// # Examples
///
/// ```rust
/// use shapewright::{record, sequence};
/// use shapewright::shape::{Primitive, Shape};
///
/// let leaf = Shape::Primitive(Primitive::Boolean);
/// let nested = sequence::tuple_to_nested_object(&sequence!["a", "b"], leaf.clone()).unwrap();
/// assert_eq!(nested, Shape::from(record! { "a" => record! { "b" => leaf.clone() } }));
///
/// assert_eq!(sequence::tuple_to_nested_object(&sequence![], leaf.clone()).unwrap(), leaf);
/// ```
pub fn tuple_to_nested_object(sequence: &Sequence, leaf: Shape) -> Result<Shape, ShapeError> {
    sequence.iter().rev().try_fold(leaf, |inner, element| match element {
        Shape::Literal(Literal::String(key)) => {
            Ok(Shape::Record(Record::from_fields([Field::new(key, inner)])))
        }
        other => Err(ShapeError::InvalidKey {
            found: other.kind(),
        }),
    })
}

/// Applies a record transformation to every record element.
///
/// Elements that are not records are kept unchanged. This is how record
/// projections such as [`record::pick`](crate::record::pick) are lifted
/// over a sequence.
///
/// # Examples
///
/// ```rust
/// use shapewright::{record, sequence};
///
/// let rows = sequence![record! { "id" => 1, "name" => "a" }, 0];
/// let ids = sequence::map_records(&rows, |row| record::pick(row, &["id"]));
/// assert_eq!(ids, sequence![record! { "id" => 1 }, 0]);
/// ```
#[must_use]
pub fn map_records<F>(sequence: &Sequence, mut transform: F) -> Sequence
where
    F: FnMut(&Record) -> Record,
{
    sequence
        .iter()
        .map(|element| match element {
            Shape::Record(record) => Shape::Record(transform(record)),
            other => other.clone(),
        })
        .collect()
}

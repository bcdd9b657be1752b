//! Counting by tuple length.

use crate::error::ShapeError;
use crate::shape::{Literal, Shape, ShapeKind};

/// Decrements a positive number literal.
///
/// The result is the length of the tuple one element shorter than a tuple
/// of `n` elements. No such tuple exists for `0` or below, so those yield
/// [`Shape::Never`].
///
/// # Errors
///
/// Returns [`ShapeError::KindMismatch`] for anything but a number literal.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// assert_eq!(sequence::minus_one(&Shape::from(55)), Ok(Shape::from(54)));
/// assert_eq!(sequence::minus_one(&Shape::from(1)), Ok(Shape::from(0)));
/// assert_eq!(sequence::minus_one(&Shape::from(0)), Ok(Shape::Never));
/// assert!(sequence::minus_one(&Shape::from("3")).is_err());
/// ```
pub fn minus_one(shape: &Shape) -> Result<Shape, ShapeError> {
    match shape {
        Shape::Literal(Literal::Number(value)) if *value > 0 => Ok(Shape::number(value - 1)),
        Shape::Literal(Literal::Number(_)) => {
            trace_event!("no shorter tuple for a non-positive length");
            Ok(Shape::Never)
        }
        other => Err(ShapeError::KindMismatch {
            expected: ShapeKind::Literal,
            found: other.kind(),
        }),
    }
}

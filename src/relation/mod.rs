//! Relations between shapes.
//!
//! Two relations drive every evaluator decision:
//!
//! - [`is_equal`]: strict structural identity. `includes` and union
//!   deduplication are built on it. It never coerces: `true` differs from
//!   `boolean`, `any` differs from `unknown`, and a readonly field differs
//!   from a mutable one.
//! - [`is_assignable`]: structural assignability. `pick_by_type`,
//!   `omit_by_type`, `exclude` and `look_up` are built on it.
//!
//! [`if_else`] selects between two shapes by a boolean condition.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::relation::{is_assignable, is_equal};
//! use shapewright::shape::{Primitive, Shape};
//!
//! let literal = Shape::from(1);
//! let number = Shape::Primitive(Primitive::Number);
//!
//! assert!(is_assignable(&literal, &number));
//! assert!(!is_assignable(&number, &literal));
//! assert!(!is_equal(&literal, &number));
//! ```

use crate::error::ShapeError;
use crate::shape::{Function, Literal, Primitive, Record, Sequence, Shape, ShapeKind};

/// Returns `true` if `left` and `right` are the same shape.
///
/// Records compare without regard to field order and unions without regard
/// to member order; everything else compares element by element.
///
/// # Examples
///
/// ```rust
/// use shapewright::relation::is_equal;
/// use shapewright::shape::{Primitive, Shape};
///
/// assert!(is_equal(&Shape::Any, &Shape::Any));
/// assert!(!is_equal(&Shape::Any, &Shape::Unknown));
/// assert!(!is_equal(&Shape::from(true), &Shape::Primitive(Primitive::Boolean)));
/// ```
#[inline]
#[must_use]
pub fn is_equal(left: &Shape, right: &Shape) -> bool {
    left == right
}

/// Returns `true` if a value of shape `source` fits where `target` is
/// expected.
///
/// - `never` is assignable to everything; `unknown` and `any` accept
///   everything.
/// - `any` is assignable to everything except `never`.
/// - A union source must fit entirely; a union target needs one accepting
///   member.
/// - Literals fit their primitive; tuples fit arrays of a common element.
/// - Records use width subtyping: every required target field must be
///   present and required in the source; optional target fields may be
///   missing.
/// - Function parameters are contravariant, return shapes covariant, and a
///   `void` return accepts any return shape.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::relation::is_assignable;
/// use shapewright::shape::{Primitive, Shape};
///
/// let wide = Shape::from(record! { "a" => 1, "b" => "x" });
/// let narrow = Shape::from(record! { "a" => Shape::Primitive(Primitive::Number) });
/// assert!(is_assignable(&wide, &narrow));
/// assert!(!is_assignable(&narrow, &wide));
/// ```
#[must_use]
pub fn is_assignable(source: &Shape, target: &Shape) -> bool {
    match (source, target) {
        (Shape::Never, _) | (_, Shape::Unknown | Shape::Any) => true,
        (_, Shape::Never) => false,
        (Shape::Any, _) => true,
        (Shape::Union(union), _) => union
            .members()
            .iter()
            .all(|member| is_assignable(member, target)),
        (_, Shape::Union(union)) => union
            .members()
            .iter()
            .any(|member| is_assignable(source, member)),
        (Shape::Null, Shape::Null)
        | (Shape::Undefined, Shape::Undefined | Shape::Void)
        | (Shape::Void, Shape::Void) => true,
        (Shape::Literal(source_literal), Shape::Literal(target_literal)) => {
            source_literal == target_literal
        }
        (Shape::Literal(literal), Shape::Primitive(primitive)) => literal.primitive() == *primitive,
        (Shape::Primitive(source_primitive), Shape::Primitive(target_primitive)) => {
            source_primitive == target_primitive
        }
        (
            Shape::Sequence(_)
            | Shape::Array(_)
            | Shape::Record(_)
            | Shape::Function(_)
            | Shape::Promise(_),
            Shape::Primitive(Primitive::Object),
        ) => true,
        (Shape::Sequence(source_sequence), Shape::Sequence(target_sequence)) => {
            is_sequence_assignable(source_sequence, target_sequence)
        }
        (Shape::Sequence(sequence), Shape::Array(element)) => sequence
            .iter()
            .all(|member| is_assignable(member, element)),
        (Shape::Array(source_element), Shape::Array(target_element))
        | (Shape::Promise(source_element), Shape::Promise(target_element)) => {
            is_assignable(source_element, target_element)
        }
        (Shape::Record(source_record), Shape::Record(target_record)) => {
            is_record_assignable(source_record, target_record)
        }
        (Shape::Function(source_function), Shape::Function(target_function)) => {
            is_function_assignable(source_function, target_function)
        }
        _ => false,
    }
}

fn is_sequence_assignable(source: &Sequence, target: &Sequence) -> bool {
    source.len() == target.len()
        && source
            .iter()
            .zip(target.iter())
            .all(|(source_element, target_element)| is_assignable(source_element, target_element))
}

fn is_record_assignable(source: &Record, target: &Record) -> bool {
    target
        .iter()
        .all(|target_field| match source.field(target_field.key().as_str()) {
            Some(source_field) => {
                (!source_field.is_optional() || target_field.is_optional())
                    && is_assignable(source_field.value(), target_field.value())
            }
            None => target_field.is_optional(),
        })
}

fn is_function_assignable(source: &Function, target: &Function) -> bool {
    let source_parameters = source.parameters();
    let target_parameters = target.parameters();
    source_parameters.len() <= target_parameters.len()
        && source_parameters
            .iter()
            .zip(target_parameters.iter())
            .all(|(source_parameter, target_parameter)| {
                is_assignable(target_parameter, source_parameter)
            })
        && (matches!(target.returns(), Shape::Void)
            || is_assignable(source.returns(), target.returns()))
}

/// Removes from `shape` every union member assignable to `excluded`.
///
/// A non-union shape is treated as a one-member union, so the result is
/// either the shape itself or [`Shape::Never`]. `any` matches both the
/// excluded and the kept side, so it always survives.
///
/// # Examples
///
/// ```rust
/// use shapewright::relation::exclude;
/// use shapewright::shape::Shape;
///
/// let letters = Shape::union([Shape::from("a"), Shape::from("b"), Shape::from("c")]);
/// assert_eq!(
///     exclude(&letters, &Shape::from("a")),
///     Shape::union([Shape::from("b"), Shape::from("c")])
/// );
/// assert_eq!(exclude(&Shape::from("a"), &Shape::from("a")), Shape::Never);
/// assert_eq!(exclude(&Shape::Any, &Shape::Undefined), Shape::Any);
/// ```
#[must_use]
pub fn exclude(shape: &Shape, excluded: &Shape) -> Shape {
    Shape::union(
        shape
            .members()
            .iter()
            .filter(|member| matches!(member, Shape::Any) || !is_assignable(member, excluded))
            .cloned(),
    )
}

/// Chooses between two shapes by a boolean condition.
///
/// `true` selects `when_true` and `false` selects `when_false`. The
/// condition distributes like a union of its literals: `boolean` and `any`
/// yield the union of both branches, and `never` yields `never`.
///
/// # Errors
///
/// Returns [`ShapeError::KindMismatch`] when the condition is not boolean.
///
/// # Examples
///
/// ```rust
/// use shapewright::relation::if_else;
/// use shapewright::shape::{Primitive, Shape};
///
/// let picked = if_else(&Shape::from(true), Shape::from("a"), Shape::from("b"));
/// assert_eq!(picked, Ok(Shape::from("a")));
/// let picked = if_else(&Shape::from(false), Shape::from("a"), Shape::from(2));
/// assert_eq!(picked, Ok(Shape::from(2)));
/// assert_eq!(
///     if_else(&Shape::Primitive(Primitive::Boolean), Shape::from("a"), Shape::from("b")),
///     Ok(Shape::union([Shape::from("a"), Shape::from("b")]))
/// );
/// assert!(if_else(&Shape::Null, Shape::from("a"), Shape::from("b")).is_err());
/// ```
pub fn if_else(
    condition: &Shape,
    when_true: Shape,
    when_false: Shape,
) -> Result<Shape, ShapeError> {
    match condition {
        Shape::Literal(Literal::Boolean(true)) => Ok(when_true),
        Shape::Literal(Literal::Boolean(false)) => Ok(when_false),
        Shape::Primitive(Primitive::Boolean) | Shape::Any => {
            Ok(Shape::union([when_true, when_false]))
        }
        Shape::Never => Ok(Shape::Never),
        other => Err(ShapeError::KindMismatch {
            expected: ShapeKind::Primitive,
            found: other.kind(),
        }),
    }
}

/// Returns `true` if `shape` is [`Shape::Never`].
#[inline]
#[must_use]
pub const fn is_never(shape: &Shape) -> bool {
    shape.is_never()
}

/// Returns `true` if `shape` is a union of two or more members.
#[inline]
#[must_use]
pub const fn is_union(shape: &Shape) -> bool {
    matches!(shape, Shape::Union(_))
}

//! Field projections by key and by value shape.

use crate::relation::is_assignable;
use crate::shape::{Record, Shape};

/// Keeps only the fields whose key is listed.
///
/// Retained fields keep their value and modifiers. Listed keys that are
/// absent from the record are ignored.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let todo = record! { "a" => 1, "b" => 2, "c" => 3 };
/// assert_eq!(record::pick(&todo, &["a", "c"]), record! { "a" => 1, "c" => 3 });
/// assert_eq!(record::pick(&todo, &["z"]), record! {});
/// ```
#[must_use]
pub fn pick(record: &Record, keys: &[&str]) -> Record {
    trace_event!(
        missing = ?keys
            .iter()
            .filter(|key| !record.contains_key(key))
            .collect::<Vec<_>>(),
        "picked keys that are not present"
    );
    record.filter(|field| keys.contains(&field.key().as_str()))
}

/// Keeps only the fields whose key is not listed.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let todo = record! { "a" => 1, "b" => 2, "c" => 3 };
/// assert_eq!(record::omit(&todo, &["b"]), record! { "a" => 1, "c" => 3 });
/// assert_eq!(record::omit(&todo, &[]), todo);
/// ```
#[must_use]
pub fn omit(record: &Record, keys: &[&str]) -> Record {
    record.filter(|field| !keys.contains(&field.key().as_str()))
}

/// Keeps the fields whose value is assignable to `target`.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::{Primitive, Shape};
///
/// let model = record! { "name" => Shape::Primitive(Primitive::String), "count" => 1, "active" => true };
/// assert_eq!(
///     record::pick_by_type(&model, &Shape::Primitive(Primitive::Boolean)),
///     record! { "active" => true }
/// );
/// ```
#[must_use]
pub fn pick_by_type(record: &Record, target: &Shape) -> Record {
    record.filter(|field| is_assignable(field.value(), target))
}

/// Keeps the fields whose value is not assignable to `target`.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::{Primitive, Shape};
///
/// let model = record! { "name" => "x", "count" => 1, "active" => true };
/// assert_eq!(
///     record::omit_by_type(&model, &Shape::Primitive(Primitive::Boolean)),
///     record! { "name" => "x", "count" => 1 }
/// );
/// ```
#[must_use]
pub fn omit_by_type(record: &Record, target: &Shape) -> Record {
    record.filter(|field| !is_assignable(field.value(), target))
}

/// Selects the members of a union of records whose `type` field is
/// assignable to `tag`.
///
/// Members that are not records, or records without a `type` field, never
/// match. Nothing matching yields [`Shape::Never`].
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::Shape;
///
/// let cat = Shape::from(record! { "type" => "cat", "lives" => 9 });
/// let dog = Shape::from(record! { "type" => "dog", "bark" => true });
/// let animals = Shape::union([cat.clone(), dog]);
///
/// assert_eq!(record::look_up(&animals, &Shape::from("cat")), cat);
/// assert_eq!(record::look_up(&animals, &Shape::from("cow")), Shape::Never);
/// ```
#[must_use]
pub fn look_up(union: &Shape, tag: &Shape) -> Shape {
    Shape::union(
        union
            .members()
            .iter()
            .filter(|member| {
                member
                    .as_record()
                    .and_then(|record| record.get("type"))
                    .is_some_and(|discriminant| is_assignable(discriminant, tag))
            })
            .cloned(),
    )
}

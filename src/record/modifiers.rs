//! Rewrites of the `optional` and `readonly` field modifiers.

use super::is_selected;
use crate::shape::{Modifiers, Record, Sequence, Shape};

/// Marks the selected fields optional.
///
/// `None` selects every field. Unselected fields, values and the
/// enumeration order are left as they are.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let user = record! { "name" => "x", "age" => 1, "address" => "y" };
/// let partial = record::partial_by_keys(&user, Some(["name"].as_slice()));
/// assert!(partial.field("name").is_some_and(|field| field.is_optional()));
/// assert!(partial.field("age").is_some_and(|field| !field.is_optional()));
///
/// let all = record::partial_by_keys(&user, None);
/// assert!(all.iter().all(|field| field.is_optional()));
/// ```
#[must_use]
pub fn partial_by_keys(record: &Record, keys: Option<&[&str]>) -> Record {
    rewrite_selected(record, keys, |modifiers| Modifiers {
        optional: true,
        ..modifiers
    })
}

/// Clears the optional flag on the selected fields.
///
/// `None` selects every field. Values are not touched: an optional field
/// made required keeps exactly the value it had.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let user = record::partial_by_keys(&record! { "name" => "x", "age" => 1 }, None);
/// let required = record::required_by_keys(&user, Some(["name"].as_slice()));
/// assert!(required.field("name").is_some_and(|field| !field.is_optional()));
/// assert!(required.field("age").is_some_and(|field| field.is_optional()));
/// ```
#[must_use]
pub fn required_by_keys(record: &Record, keys: Option<&[&str]>) -> Record {
    rewrite_selected(record, keys, |modifiers| Modifiers {
        optional: false,
        ..modifiers
    })
}

/// Marks every field readonly.
#[must_use]
pub fn readonly(record: &Record) -> Record {
    readonly_by_keys(record, None)
}

/// Marks the selected fields readonly. `None` selects every field.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let todo = record! { "title" => "x", "completed" => false };
/// let frozen = record::readonly_by_keys(&todo, Some(["title"].as_slice()));
/// assert!(frozen.field("title").is_some_and(|field| field.is_readonly()));
/// assert!(frozen.field("completed").is_some_and(|field| !field.is_readonly()));
/// ```
#[must_use]
pub fn readonly_by_keys(record: &Record, keys: Option<&[&str]>) -> Record {
    rewrite_selected(record, keys, |modifiers| Modifiers {
        readonly: true,
        ..modifiers
    })
}

/// Clears the readonly flag on every field.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let todo = record! { "title" => "x" };
/// assert_eq!(record::mutable(&record::readonly(&todo)), todo);
/// ```
#[must_use]
pub fn mutable(record: &Record) -> Record {
    rewrite_selected(record, None, |modifiers| Modifiers {
        readonly: false,
        ..modifiers
    })
}

fn rewrite_selected<F>(record: &Record, keys: Option<&[&str]>, rewrite: F) -> Record
where
    F: Fn(Modifiers) -> Modifiers,
{
    record.map_fields(|field| {
        if is_selected(keys, field.key()) {
            field.with_modifiers(rewrite(field.modifiers()))
        } else {
            field.clone()
        }
    })
}

/// Marks every record reachable from `shape` readonly.
///
/// Descends through record values, sequence elements, array elements and
/// union members. Functions, promises and scalar shapes are returned as
/// they are.
///
/// # Examples
///
/// ```rust
/// use shapewright::{record, sequence};
/// use shapewright::shape::Shape;
///
/// let nested = Shape::from(record! { "a" => record! { "b" => 1 }, "list" => sequence![record! { "c" => 2 }] });
/// let frozen = record::deep_readonly(&nested);
///
/// let outer = frozen.as_record().unwrap();
/// assert!(outer.iter().all(|field| field.is_readonly()));
/// let inner = outer.get("a").and_then(Shape::as_record).unwrap();
/// assert!(inner.field("b").is_some_and(|field| field.is_readonly()));
/// ```
#[must_use]
pub fn deep_readonly(shape: &Shape) -> Shape {
    match shape {
        Shape::Record(record) => Shape::Record(record.map_fields(|field| {
            field
                .with_value(deep_readonly(field.value()))
                .with_modifiers(Modifiers {
                    readonly: true,
                    ..field.modifiers()
                })
        })),
        Shape::Sequence(sequence) => {
            Shape::Sequence(sequence.iter().map(deep_readonly).collect::<Sequence>())
        }
        Shape::Array(element) => Shape::array(deep_readonly(element)),
        Shape::Union(union) => Shape::union(union.members().iter().map(deep_readonly)),
        other => other.clone(),
    }
}

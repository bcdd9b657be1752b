//! Combinations of records and record-to-shape conversions.

use crate::error::ShapeError;
use crate::relation::exclude;
use crate::shape::{Field, Record, Sequence, Shape, Text};

/// Combines two records; `right` wins on collision.
///
/// Keys defined on a single side keep their field. Colliding keys keep the
/// position they have in `left` and take the field of `right`.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let foo = record! { "name" => "x", "age" => "y" };
/// let bar = record! { "age" => 1, "sex" => "z" };
/// assert_eq!(
///     record::merge(&foo, &bar),
///     record! { "name" => "x", "age" => 1, "sex" => "z" }
/// );
/// ```
#[must_use]
pub fn merge(left: &Record, right: &Record) -> Record {
    Record::from_fields(left.iter().chain(right.iter()).cloned())
}

/// Returns the fields whose key is defined on exactly one side.
///
/// Each retained field comes from the side that defines it, `left` first.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let foo = record! { "name" => "x", "age" => 1 };
/// let bar = record! { "name" => "x", "gender" => 2 };
/// assert_eq!(record::diff(&foo, &bar), record! { "age" => 1, "gender" => 2 });
/// assert_eq!(record::diff(&foo, &foo), record! {});
/// ```
#[must_use]
pub fn diff(left: &Record, right: &Record) -> Record {
    let left_only = left
        .iter()
        .filter(|field| !right.contains_key(field.key().as_str()));
    let right_only = right
        .iter()
        .filter(|field| !left.contains_key(field.key().as_str()));
    Record::from_fields(left_only.chain(right_only).cloned())
}

/// Adds a field without modifiers, overriding an existing key.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::Shape;
///
/// let test = record! { "key" => "cat" };
/// assert_eq!(
///     record::append_field(&test, "value", Shape::from(4)),
///     record! { "key" => "cat", "value" => 4 }
/// );
/// assert_eq!(
///     record::append_field(&test, "key", Shape::from("dog")),
///     record! { "key" => "dog" }
/// );
/// ```
#[must_use]
pub fn append_field(record: &Record, key: impl Into<Text>, value: Shape) -> Record {
    record.with_field(Field::new(key, value))
}

/// Swaps keys and values.
///
/// Every value must be a string, number or boolean literal; its key form
/// becomes the new key and the old key becomes a string literal value. When
/// several fields share a value, the last one in enumeration order wins.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidKey`] for the first value without a key form.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
///
/// let flipped = record::flip(&record! { "pi" => "a", "bool" => true, "n" => 3 }).unwrap();
/// assert_eq!(flipped, record! { "a" => "pi", "true" => "bool", "3" => "n" });
///
/// let colliding = record::flip(&record! { "first" => "x", "second" => "x" }).unwrap();
/// assert_eq!(colliding, record! { "x" => "second" });
///
/// assert!(record::flip(&record! { "nested" => record! {} }).is_err());
/// ```
pub fn flip(record: &Record) -> Result<Record, ShapeError> {
    record
        .iter()
        .map(|field| {
            let key = field.value().to_key()?;
            Ok(Field::new(key, Shape::from(field.key().clone())))
        })
        .collect()
}

/// Returns the union of `[key, value]` tuples of every field.
///
/// The value of an optional field loses its `undefined` member, unless
/// `undefined` is all there is. An empty record yields [`Shape::Never`].
///
/// # Examples
///
/// ```rust
/// use shapewright::{record, sequence};
/// use shapewright::shape::{Modifiers, Primitive, Shape};
///
/// let model = record! { "name" => Shape::Primitive(Primitive::String), "age" => 1 };
/// assert_eq!(
///     record::object_entries(&model),
///     Shape::union([
///         Shape::from(sequence!["name", Shape::Primitive(Primitive::String)]),
///         Shape::from(sequence!["age", 1]),
///     ])
/// );
///
/// let optional = record::partial_by_keys(
///     &record! { "key" => Shape::union([Shape::from(1), Shape::Undefined]) },
///     None,
/// );
/// assert_eq!(record::object_entries(&optional), Shape::from(sequence!["key", 1]));
/// ```
#[must_use]
pub fn object_entries(record: &Record) -> Shape {
    Shape::union(record.iter().map(|field| {
        let value = if field.is_optional() {
            match exclude(field.value(), &Shape::Undefined) {
                Shape::Never => field.value().clone(),
                defined => defined,
            }
        } else {
            field.value().clone()
        };
        Shape::Sequence(Sequence::from(vec![Shape::from(field.key().clone()), value]))
    }))
}

/// Replaces the values of the listed keys in every record of `shape`.
///
/// Distributes over union members. A listed key takes its value from
/// `replacements`, or [`Shape::Never`] when `replacements` does not define
/// it. Listed keys a record lacks are not added, and members that are not
/// records are kept as they are.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::{Primitive, Shape};
///
/// let user = Shape::from(record! { "kind" => "user", "name" => Shape::Primitive(Primitive::String) });
/// let replacements = record! { "name" => Shape::Primitive(Primitive::Number) };
/// assert_eq!(
///     record::replace_keys(&user, &["name"], &replacements),
///     Shape::from(record! { "kind" => "user", "name" => Shape::Primitive(Primitive::Number) })
/// );
/// assert_eq!(
///     record::replace_keys(&user, &["kind"], &replacements),
///     Shape::from(record! { "kind" => Shape::Never, "name" => Shape::Primitive(Primitive::String) })
/// );
/// ```
#[must_use]
pub fn replace_keys(shape: &Shape, keys: &[&str], replacements: &Record) -> Shape {
    Shape::union(shape.members().iter().map(|member| match member {
        Shape::Record(record) => Shape::Record(record.map_fields(|field| {
            if keys.contains(&field.key().as_str()) {
                let replacement = replacements
                    .get(field.key().as_str())
                    .cloned()
                    .unwrap_or(Shape::Never);
                field.with_value(replacement)
            } else {
                field.clone()
            }
        })),
        other => other.clone(),
    }))
}

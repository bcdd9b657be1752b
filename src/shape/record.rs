//! Keyed records with per-field modifiers.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use super::{ReferenceCounter, Shape, Text};

/// Property modifiers of a record field.
///
/// `optional` marks a field that may be absent (`key?: value`); `readonly`
/// marks a field that may not be reassigned (`readonly key: value`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    /// The field may be absent.
    pub optional: bool,
    /// The field may not be reassigned.
    pub readonly: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        optional: false,
        readonly: false,
    };

    /// Only the optional modifier.
    pub const OPTIONAL: Self = Self {
        optional: true,
        readonly: false,
    };

    /// Only the readonly modifier.
    pub const READONLY: Self = Self {
        optional: false,
        readonly: true,
    };
}

/// A single `key: value` entry of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    key: Text,
    value: Shape,
    #[cfg_attr(feature = "serde", serde(default))]
    modifiers: Modifiers,
}

impl Field {
    /// Creates a field without modifiers.
    pub fn new(key: impl Into<Text>, value: impl Into<Shape>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Returns the field key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &Text {
        &self.key
    }

    /// Returns the field value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Shape {
        &self.value
    }

    /// Returns the field modifiers.
    #[inline]
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns `true` if the field is optional.
    #[inline]
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.modifiers.optional
    }

    /// Returns `true` if the field is readonly.
    #[inline]
    #[must_use]
    pub const fn is_readonly(&self) -> bool {
        self.modifiers.readonly
    }

    /// Returns a copy of this field with the given modifiers.
    #[must_use]
    pub fn with_modifiers(&self, modifiers: Modifiers) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            modifiers,
        }
    }

    /// Returns a copy of this field with the given value.
    #[must_use]
    pub fn with_value(&self, value: Shape) -> Self {
        Self {
            key: self.key.clone(),
            value,
            modifiers: self.modifiers,
        }
    }
}

/// An immutable mapping from unique keys to fields.
///
/// Fields enumerate in insertion order. Equality ignores that order: two
/// records are equal when they hold the same keys with equal values and
/// modifiers. Inserting a key that already exists replaces its field in
/// place, so the last write wins while the original position is kept.
///
/// Bulk construction ([`Record::from_fields`], `collect`, `record!`) indexes
/// keys while collecting and is linear in the number of fields. Single-key
/// lookups and [`Record::with_field`] scan the fields.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::{Field, Record, Shape};
///
/// let first = record! { "a" => 1, "b" => 2 };
/// let second = record! { "b" => 2, "a" => 1 };
/// assert_eq!(first, second);
///
/// let updated = first.with_field(Field::new("a", 10));
/// assert_eq!(updated.get("a"), Some(&Shape::from(10)));
/// assert_eq!(first.get("a"), Some(&Shape::from(1)));
/// let keys: Vec<&str> = updated.keys().map(|key| key.as_str()).collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
#[derive(Clone, Eq)]
pub struct Record {
    fields: ReferenceCounter<[Field]>,
}

impl Record {
    /// Creates a record without fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Builds a record from fields, letting later duplicates override
    /// earlier ones in place.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        let mut collected: Vec<Field> = Vec::new();
        let mut positions: HashMap<Text, usize> = HashMap::new();
        for field in fields {
            match positions.entry(field.key.clone()) {
                Entry::Occupied(entry) => collected[*entry.get()] = field,
                Entry::Vacant(entry) => {
                    entry.insert(collected.len());
                    collected.push(field);
                }
            }
        }
        Self {
            fields: ReferenceCounter::from(collected),
        }
    }

    /// Returns the number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field stored under `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == *key)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Shape> {
        self.field(key).map(Field::value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Returns the fields as a slice in enumeration order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns an iterator over the keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &Text> {
        self.fields.iter().map(Field::key)
    }

    /// Returns an iterator over the fields in enumeration order.
    pub fn iter(&self) -> RecordIterator<'_> {
        RecordIterator {
            inner: self.fields.iter(),
        }
    }

    /// Returns a new record with `field` inserted.
    ///
    /// An existing field with the same key is replaced in place.
    #[must_use]
    pub fn with_field(&self, field: Field) -> Self {
        let mut fields = self.fields.to_vec();
        match fields.iter().position(|existing| existing.key == field.key) {
            Some(position) => fields[position] = field,
            None => fields.push(field),
        }
        Self {
            fields: ReferenceCounter::from(fields),
        }
    }

    /// Returns a new record keeping only the fields accepted by `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Field) -> bool,
    {
        let fields: Vec<Field> = self
            .fields
            .iter()
            .filter(|field| predicate(field))
            .cloned()
            .collect();
        Self {
            fields: ReferenceCounter::from(fields),
        }
    }

    /// Returns a new record with every field passed through `function`.
    ///
    /// `function` must keep keys unique; it is meant for value and modifier
    /// rewrites.
    #[must_use]
    pub fn map_fields<F>(&self, function: F) -> Self
    where
        F: FnMut(&Field) -> Field,
    {
        let fields: Vec<Field> = self.fields.iter().map(function).collect();
        Self {
            fields: ReferenceCounter::from(fields),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .fields
                .iter()
                .all(|field| other.field(field.key.as_str()) == Some(field))
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}

impl FromIterator<(Text, Shape)> for Record {
    fn from_iter<I: IntoIterator<Item = (Text, Shape)>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().map(|(key, value)| Field::new(key, value)))
    }
}

impl TryFrom<Shape> for Record {
    type Error = crate::error::ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Record(record) => Ok(record),
            other => Err(crate::error::ShapeError::KindMismatch {
                expected: super::ShapeKind::Record,
                found: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the fields of a [`Record`].
pub struct RecordIterator<'a> {
    inner: std::slice::Iter<'a, Field>,
}

impl<'a> Iterator for RecordIterator<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = RecordIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

fn is_identifier(key: &str) -> bool {
    let mut characters = key.chars();
    characters
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
        && characters.all(|character| character.is_alphanumeric() || character == '_' || character == '$')
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.readonly {
            formatter.write_str("readonly ")?;
        }
        if is_identifier(self.key.as_str()) {
            write!(formatter, "{}", self.key)?;
        } else {
            write!(formatter, "\"{}\"", self.key.as_str().escape_debug())?;
        }
        if self.modifiers.optional {
            formatter.write_str("?")?;
        }
        write!(formatter, ": {}", self.value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("{}");
        }
        formatter.write_str("{ ")?;
        for (index, field) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{field}")?;
        }
        formatter.write_str(" }")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for field in self {
            sequence.serialize_element(field)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = Vec::<Field>::deserialize(deserializer)?;
        Ok(Self::from_fields(fields))
    }
}

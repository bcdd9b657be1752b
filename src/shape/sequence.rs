//! Fixed-arity tuples of shapes.

use std::fmt;

use super::{ReferenceCounter, Shape};

/// An immutable, ordered, fixed-arity tuple of shapes.
///
/// Elements live in one shared slice, so clones are O(1). Every operation
/// that changes the elements builds a new slice and leaves the original
/// untouched.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::{Sequence, Shape};
///
/// let tuple = sequence![1, "a", true];
/// assert_eq!(tuple.len(), 3);
/// assert_eq!(tuple.first(), Some(&Shape::from(1)));
///
/// let collected: Sequence = (1..=3).map(Shape::from).collect();
/// assert_eq!(collected, sequence![1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    elements: ReferenceCounter<[Shape]>,
}

impl Sequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.elements.get(index)
    }

    /// Returns the first element, if present.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Shape> {
        self.elements.first()
    }

    /// Returns the last element, if present.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Shape> {
        self.elements.last()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Shape] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> SequenceIterator<'_> {
        SequenceIterator {
            inner: self.elements.iter(),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Shape>> for Sequence {
    fn from(elements: Vec<Shape>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl From<&[Shape]> for Sequence {
    fn from(elements: &[Shape]) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl FromIterator<Shape> for Sequence {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl TryFrom<Shape> for Sequence {
    type Error = crate::error::ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Sequence(sequence) => Ok(sequence),
            other => Err(crate::error::ShapeError::KindMismatch {
                expected: super::ShapeKind::Sequence,
                found: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the elements of a [`Sequence`].
pub struct SequenceIterator<'a> {
    inner: std::slice::Iter<'a, Shape>,
}

impl<'a> Iterator for SequenceIterator<'a> {
    type Item = &'a Shape;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SequenceIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for SequenceIterator<'_> {}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Shape;
    type IntoIter = SequenceIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl fmt::Display for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<Shape>::deserialize(deserializer)?;
        Ok(Self::from(elements))
    }
}

//! Error types for fallible shape conversions.
//!
//! Evaluations themselves never fail: a transformation that does not apply
//! returns a no-match value. Errors only arise when a shape is converted into
//! a typed view ([`Sequence`](crate::shape::Sequence),
//! [`Record`](crate::shape::Record), [`Tree`](crate::tree::Tree), ...) or used
//! as a record key, and the shape has the wrong kind.

use crate::shape::ShapeKind;

/// Represents errors that can occur when interpreting a shape.
///
/// # Examples
///
/// ```rust
/// use shapewright::error::ShapeError;
/// use shapewright::shape::ShapeKind;
///
/// let error = ShapeError::KindMismatch {
///     expected: ShapeKind::Record,
///     found: ShapeKind::Null,
/// };
/// assert_eq!(format!("{}", error), "expected a record shape, found null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape was not of the expected kind.
    KindMismatch {
        /// The kind the conversion required.
        expected: ShapeKind,
        /// The kind that was supplied.
        found: ShapeKind,
    },
    /// The shape cannot be used as a record key.
    ///
    /// Only string, number and boolean literals have a key form.
    InvalidKey {
        /// The kind that was supplied.
        found: ShapeKind,
    },
    /// A record used as a tree node lacks one of `val`, `left` or `right`.
    MalformedTree {
        /// The name of the missing field.
        missing: &'static str,
    },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(formatter, "expected a {expected} shape, found {found}")
            }
            Self::InvalidKey { found } => {
                write!(formatter, "a {found} shape cannot be used as a record key")
            }
            Self::MalformedTree { missing } => {
                write!(formatter, "tree node record is missing the `{missing}` field")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_key_display() {
        let error = ShapeError::InvalidKey {
            found: ShapeKind::Sequence,
        };
        assert_eq!(
            error.to_string(),
            "a sequence shape cannot be used as a record key"
        );
    }

    #[rstest]
    fn malformed_tree_display() {
        let error = ShapeError::MalformedTree { missing: "left" };
        assert_eq!(
            error.to_string(),
            "tree node record is missing the `left` field"
        );
    }

    #[rstest]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ShapeError::MalformedTree { missing: "val" });
    }
}

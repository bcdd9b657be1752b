//! Structural parsing of numeric-looking text.

use crate::error::ShapeError;
use crate::shape::{Literal, Sequence, Shape, ShapeKind, Text};

/// The three slots produced by [`percentage_parse`].
///
/// Each slot is empty text when the corresponding part is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PercentageParts {
    /// `+`, `-` or empty.
    pub sign: Text,
    /// Whatever remains between sign and unit. Not validated as digits.
    pub number: Text,
    /// `%` or empty.
    pub unit: Text,
}

impl PercentageParts {
    /// Renders the parts as the 3-slot tuple `[sign, number, unit]` of
    /// string literals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::sequence;
    /// use shapewright::shape::Text;
    /// use shapewright::text;
    ///
    /// let parts = text::percentage_parse(&Text::from("-5"));
    /// assert_eq!(parts.into_sequence(), sequence!["-", "5", ""]);
    /// ```
    #[must_use]
    pub fn into_sequence(self) -> Sequence {
        Sequence::from(vec![
            Shape::from(self.sign),
            Shape::from(self.number),
            Shape::from(self.unit),
        ])
    }
}

/// Splits text shaped like `(+|-)? number? %?` into its three parts.
///
/// The sign is taken only from the first character and the unit only from
/// the last remaining character. Everything in between is the number part,
/// even when it is not purely numeric: this is a structural slice, not a
/// validator.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text::{self, PercentageParts};
///
/// let parts = text::percentage_parse(&Text::from("+85%"));
/// assert_eq!(parts.sign, "+");
/// assert_eq!(parts.number, "85");
/// assert_eq!(parts.unit, "%");
///
/// let plain = text::percentage_parse(&Text::from("100"));
/// assert_eq!(plain.sign, "");
/// assert_eq!(plain.number, "100");
/// assert_eq!(plain.unit, "");
///
/// assert_eq!(text::percentage_parse(&Text::from("")), PercentageParts::default());
/// ```
#[must_use]
pub fn percentage_parse(text: &Text) -> PercentageParts {
    let mut remaining = text.as_str();

    let sign = match remaining.chars().next() {
        Some(character @ ('+' | '-')) => {
            remaining = &remaining[character.len_utf8()..];
            Text::from(character.to_string())
        }
        _ => Text::new(),
    };

    let unit = match remaining.strip_suffix('%') {
        Some(rest) => {
            remaining = rest;
            Text::from("%")
        }
        None => Text::new(),
    };

    PercentageParts {
        sign,
        number: Text::from(remaining),
        unit,
    }
}

/// Returns the decimal text of a number or string literal without a leading
/// minus sign.
///
/// # Errors
///
/// Returns [`ShapeError::KindMismatch`] when `shape` is not a number or
/// string literal.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Shape;
/// use shapewright::text;
///
/// assert_eq!(text::absolute(&Shape::from(-5)).unwrap(), "5");
/// assert_eq!(text::absolute(&Shape::from("-15")).unwrap(), "15");
/// assert_eq!(text::absolute(&Shape::from(0)).unwrap(), "0");
/// assert!(text::absolute(&Shape::Null).is_err());
/// ```
pub fn absolute(shape: &Shape) -> Result<Text, ShapeError> {
    let text = match shape {
        Shape::Literal(literal @ (Literal::Number(_) | Literal::String(_))) => literal.to_text(),
        other => {
            return Err(ShapeError::KindMismatch {
                expected: ShapeKind::Literal,
                found: other.kind(),
            });
        }
    };
    Ok(text
        .as_str()
        .strip_prefix('-')
        .map_or(text.clone(), Text::from))
}

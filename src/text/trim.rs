//! Whitespace trimming.

use crate::shape::Text;

fn strip_leading_whitespace(text: &str) -> Option<&str> {
    let mut characters = text.chars();
    match characters.next() {
        Some(character) if character.is_whitespace() => Some(characters.as_str()),
        _ => None,
    }
}

fn strip_trailing_whitespace(text: &str) -> Option<&str> {
    let mut characters = text.chars();
    match characters.next_back() {
        Some(character) if character.is_whitespace() => Some(characters.as_str()),
        _ => None,
    }
}

/// Shares the original characters when nothing was stripped.
fn rebuild(original: &Text, remaining: &str) -> Text {
    if remaining.len() == original.as_str().len() {
        original.clone()
    } else {
        Text::from(remaining)
    }
}

/// Removes leading whitespace.
///
/// One whitespace character is stripped at a time until the first
/// non-whitespace character (or the end) is reached.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::trim_left(&Text::from(" \t\n abc ")), "abc ");
/// assert_eq!(text::trim_left(&Text::from("   ")), "");
/// ```
#[must_use]
pub fn trim_left(text: &Text) -> Text {
    let mut remaining = text.as_str();
    while let Some(rest) = strip_leading_whitespace(remaining) {
        remaining = rest;
    }
    rebuild(text, remaining)
}

/// Removes trailing whitespace.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::trim_right(&Text::from(" abc \n")), " abc");
/// ```
#[must_use]
pub fn trim_right(text: &Text) -> Text {
    let mut remaining = text.as_str();
    while let Some(rest) = strip_trailing_whitespace(remaining) {
        remaining = rest;
    }
    rebuild(text, remaining)
}

/// Removes leading and trailing whitespace.
///
/// Each end is stripped to convergence independently; stripping is
/// confluent, so the order of the two sides does not affect the result and
/// `trim` is idempotent.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// let trimmed = text::trim(&Text::from("\n  a b  \t"));
/// assert_eq!(trimmed, "a b");
/// assert_eq!(text::trim(&trimmed), trimmed);
/// ```
#[must_use]
pub fn trim(text: &Text) -> Text {
    trim_right(&trim_left(text))
}

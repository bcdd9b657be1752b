//! Length, anchoring and character-set queries.

use crate::shape::{Shape, Text};

/// Returns the number of characters.
///
/// Characters are peeled off one at a time; the count of peeled characters
/// is the length. Empty text has length 0.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::length_of(&Text::from("kumiko")), 6);
/// assert_eq!(text::length_of(&Text::from("日本")), 2);
/// assert_eq!(text::length_of(&Text::from("")), 0);
/// ```
#[must_use]
pub fn length_of(text: &Text) -> usize {
    let mut characters = text.chars();
    let mut count = 0;
    while characters.next().is_some() {
        count += 1;
    }
    count
}

/// Returns `true` if `text` begins with `prefix`.
///
/// The comparison is exact: no case folding, no partial matches. Every text
/// starts with the empty prefix.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert!(text::starts_with(&Text::from("abc"), "ab"));
/// assert!(!text::starts_with(&Text::from("abc"), "AB"));
/// assert!(text::starts_with(&Text::from("abc"), ""));
/// ```
#[must_use]
pub fn starts_with(text: &Text, prefix: &str) -> bool {
    text.as_str().starts_with(prefix)
}

/// Returns `true` if `text` ends with `suffix`.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert!(text::ends_with(&Text::from("abc"), "bc"));
/// assert!(!text::ends_with(&Text::from("abc"), "abcd"));
/// ```
#[must_use]
pub fn ends_with(text: &Text, suffix: &str) -> bool {
    text.as_str().ends_with(suffix)
}

/// Returns the union of the distinct characters as single-character string
/// literals.
///
/// Duplicates collapse; member order carries no meaning. Empty text yields
/// [`Shape::Never`].
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::{Shape, Text};
/// use shapewright::text;
///
/// assert_eq!(
///     text::string_to_union(&Text::from("aba")),
///     Shape::union([Shape::from("b"), Shape::from("a")])
/// );
/// assert_eq!(text::string_to_union(&Text::from("")), Shape::Never);
/// ```
#[must_use]
pub fn string_to_union(text: &Text) -> Shape {
    Shape::union(
        text.chars()
            .map(|character| Shape::string(character.to_string())),
    )
}

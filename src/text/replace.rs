//! Substring replacement and character removal.

use crate::shape::Text;

/// Replaces the leftmost occurrence of `from` with `to`.
///
/// An empty `from` pattern is a no-op, as is a pattern that does not occur.
/// Everything around the replaced occurrence is left untouched.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// let input = Text::from("types are fun! fun!");
/// assert_eq!(text::replace(&input, "fun", "awesome"), "types are awesome! fun!");
/// assert_eq!(text::replace(&input, "", "x"), input);
/// assert_eq!(text::replace(&input, "boring", "x"), input);
/// ```
#[must_use]
pub fn replace(text: &Text, from: &str, to: &str) -> Text {
    if from.is_empty() {
        return text.clone();
    }
    let haystack = text.as_str();
    match haystack.find(from) {
        Some(position) => {
            let (prefix, rest) = haystack.split_at(position);
            let suffix = &rest[from.len()..];
            Text::from([prefix, to, suffix].concat())
        }
        None => {
            trace_event!(pattern = from, "no occurrence to replace");
            text.clone()
        }
    }
}

/// Replaces every non-overlapping occurrence of `from` with `to`.
///
/// Occurrences are found leftmost first; after a replacement the scan
/// resumes behind the matched occurrence, so the inserted `to` text is never
/// rescanned. An empty `from` pattern is a no-op.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::replace_all(&Text::from("t y p e s"), " ", ""), "types");
/// assert_eq!(text::replace_all(&Text::from("aaaa"), "aa", "a"), "aa");
/// assert_eq!(text::replace_all(&Text::from("foo"), "o", "oo"), "foooo");
/// ```
#[must_use]
pub fn replace_all(text: &Text, from: &str, to: &str) -> Text {
    if from.is_empty() {
        return text.clone();
    }
    let mut accumulator = String::with_capacity(text.as_str().len());
    let mut remaining = text.as_str();
    let mut replaced = false;
    while let Some(position) = remaining.find(from) {
        accumulator.push_str(&remaining[..position]);
        accumulator.push_str(to);
        remaining = &remaining[position + from.len()..];
        replaced = true;
    }
    if replaced {
        accumulator.push_str(remaining);
        Text::from(accumulator)
    } else {
        text.clone()
    }
}

/// Removes every occurrence of `character`.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::drop_char(&Text::from("butter fly!"), ' '), "butterfly!");
/// assert_eq!(text::drop_char(&Text::from(" b u t t e r "), 't'), " b u   e r ");
/// ```
#[must_use]
pub fn drop_char(text: &Text, character: char) -> Text {
    if !text.chars().any(|candidate| candidate == character) {
        return text.clone();
    }
    text.chars()
        .filter(|candidate| *candidate != character)
        .collect()
}

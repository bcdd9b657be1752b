//! Case conversion and class-name composition.

use crate::shape::{Shape, Text};

/// Uppercases the first character and leaves the rest unchanged.
///
/// A character whose uppercase form has several characters (`ß` → `SS`) is
/// replaced by all of them. Empty text is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::capitalize(&Text::from("foo bar")), "Foo bar");
/// assert_eq!(text::capitalize(&Text::from("")), "");
/// ```
#[must_use]
pub fn capitalize(text: &Text) -> Text {
    map_first(text, |character, output| output.extend(character.to_uppercase()))
}

/// Lowercases the first character and leaves the rest unchanged.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::uncapitalize(&Text::from("FooBar")), "fooBar");
/// ```
#[must_use]
pub fn uncapitalize(text: &Text) -> Text {
    map_first(text, |character, output| output.extend(character.to_lowercase()))
}

fn map_first<F>(text: &Text, convert: F) -> Text
where
    F: FnOnce(char, &mut String),
{
    let mut characters = text.chars();
    let Some(head) = characters.next() else {
        return text.clone();
    };
    let mut output = String::with_capacity(text.as_str().len());
    convert(head, &mut output);
    output.push_str(characters.as_str());
    if output == text.as_str() {
        text.clone()
    } else {
        Text::from(output)
    }
}

/// Converts camelCase or PascalCase text to kebab-case.
///
/// The first character is lowercased without a separator. Every later
/// uppercase character is emitted as `-` followed by its lowercase form;
/// all other characters are emitted lowercased, which leaves non-uppercase
/// characters as they are.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Text;
/// use shapewright::text;
///
/// assert_eq!(text::kebab_case(&Text::from("FooBarBaz")), "foo-bar-baz");
/// assert_eq!(text::kebab_case(&Text::from("fooBarBaz")), "foo-bar-baz");
/// assert_eq!(text::kebab_case(&Text::from("foo-bar")), "foo-bar");
/// assert_eq!(text::kebab_case(&Text::from("ABC")), "a-b-c");
/// ```
#[must_use]
pub fn kebab_case(text: &Text) -> Text {
    let mut output = String::with_capacity(text.as_str().len() * 2);
    for (index, character) in text.chars().enumerate() {
        if index > 0 && character.is_uppercase() {
            output.push('-');
        }
        output.extend(character.to_lowercase());
    }
    Text::from(output)
}

/// Generates BEM class names from a block, its elements and modifiers.
///
/// Produces the union of `block__element--modifier` for every combination.
/// An empty element or modifier list contributes no suffix.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::Shape;
/// use shapewright::text;
///
/// assert_eq!(
///     text::bem("btn", &["price"], &["warning", "success"]),
///     Shape::union([
///         Shape::from("btn__price--warning"),
///         Shape::from("btn__price--success"),
///     ])
/// );
/// assert_eq!(text::bem("btn", &[], &[]), Shape::from("btn"));
/// ```
#[must_use]
pub fn bem(block: &str, elements: &[&str], modifiers: &[&str]) -> Shape {
    let element_suffixes = suffixes("__", elements);
    let modifier_suffixes = suffixes("--", modifiers);
    Shape::union(element_suffixes.iter().flat_map(|element| {
        modifier_suffixes
            .iter()
            .map(move |modifier| Shape::string(format!("{block}{element}{modifier}")))
    }))
}

fn suffixes(separator: &str, parts: &[&str]) -> Vec<String> {
    if parts.is_empty() {
        vec![String::new()]
    } else {
        parts
            .iter()
            .map(|part| format!("{separator}{part}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ß", "SS")]
    #[case("élan", "Élan")]
    #[case("1abc", "1abc")]
    fn capitalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(&Text::from(input)), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("A", "a")]
    #[case("fooBar", "foo-bar")]
    #[case("foo_bar", "foo_bar")]
    #[case("Foo-Bar", "foo--bar")]
    #[case("😎", "😎")]
    fn kebab_case_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(kebab_case(&Text::from(input)), expected);
    }

    #[rstest]
    fn bem_without_modifiers() {
        assert_eq!(
            bem("btn", &["price", "label"], &[]),
            Shape::union([Shape::from("btn__price"), Shape::from("btn__label")])
        );
    }
}

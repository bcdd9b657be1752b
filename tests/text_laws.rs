#![cfg(feature = "text")]
//! Property-based tests for the Text Evaluator.
//!
//! ## Laws
//!
//! 1. **Trim idempotence**: `trim(trim(s)) == trim(s)`
//! 2. **Trim confluence**: `trim_left(trim_right(s)) == trim_right(trim_left(s))`
//! 3. **Absent pattern**: `replace(s, p, r) == s` when `p` does not occur in `s`
//! 4. **Character length**: `length_of(s) == s.chars().count()`

use proptest::prelude::*;
use shapewright::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates texts mixing letters, ASCII and Unicode whitespace and
/// multi-byte characters.
fn text_strategy() -> impl Strategy<Value = Text> {
    "[a-zA-Z \t\n\u{3000}日本-]{0,16}".prop_map(Text::from)
}

proptest! {
    // =========================================================================
    // Trimming
    // =========================================================================

    #[test]
    fn prop_trim_is_idempotent(input in text_strategy()) {
        let trimmed = text::trim(&input);
        prop_assert_eq!(text::trim(&trimmed), trimmed);
    }

    #[test]
    fn prop_trim_sides_are_confluent(input in text_strategy()) {
        prop_assert_eq!(
            text::trim_left(&text::trim_right(&input)),
            text::trim_right(&text::trim_left(&input))
        );
    }

    #[test]
    fn prop_trim_agrees_with_str_trim(input in text_strategy()) {
        prop_assert_eq!(text::trim(&input), Text::from(input.as_str().trim()));
    }

    #[test]
    fn prop_trimmed_text_has_no_outer_whitespace(input in text_strategy()) {
        let trimmed = text::trim(&input);
        prop_assert!(!trimmed.chars().next().is_some_and(char::is_whitespace));
        prop_assert!(!trimmed.chars().next_back().is_some_and(char::is_whitespace));
    }

    // =========================================================================
    // Rewriting
    // =========================================================================

    #[test]
    fn prop_replace_absent_pattern_is_identity(input in text_strategy(), replacement in "[a-z]{0,4}") {
        let pattern = "#";
        prop_assert_eq!(text::replace(&input, pattern, &replacement), input.clone());
        prop_assert_eq!(text::replace_all(&input, pattern, &replacement), input);
    }

    #[test]
    fn prop_replace_all_agrees_with_str_replace(
        input in text_strategy(),
        pattern in "[a-z ]{1,2}",
        replacement in "[a-z]{0,3}"
    ) {
        prop_assert_eq!(
            text::replace_all(&input, &pattern, &replacement),
            Text::from(input.as_str().replace(&pattern, &replacement))
        );
    }

    #[test]
    fn prop_replace_agrees_with_str_replacen(
        input in text_strategy(),
        pattern in "[a-z ]{1,2}",
        replacement in "[a-z]{0,3}"
    ) {
        prop_assert_eq!(
            text::replace(&input, &pattern, &replacement),
            Text::from(input.as_str().replacen(&pattern, &replacement, 1))
        );
    }

    #[test]
    fn prop_drop_char_removes_every_occurrence(input in text_strategy(), character in "[a-z ]") {
        let character = character.chars().next().unwrap_or(' ');
        let dropped = text::drop_char(&input, character);
        prop_assert!(dropped.chars().all(|candidate| candidate != character));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[test]
    fn prop_length_of_counts_characters(input in text_strategy()) {
        prop_assert_eq!(text::length_of(&input), input.as_str().chars().count());
    }

    #[test]
    fn prop_text_starts_and_ends_with_itself(input in text_strategy()) {
        prop_assert!(text::starts_with(&input, input.as_str()));
        prop_assert!(text::ends_with(&input, input.as_str()));
    }

    #[test]
    fn prop_kebab_case_has_no_uppercase(input in "[a-zA-Z]{0,12}") {
        let kebab = text::kebab_case(&Text::from(input));
        prop_assert!(!kebab.chars().any(char::is_uppercase));
    }
}

//! Text Evaluator.
//!
//! Operations that decompose and rebuild [`Text`](crate::shape::Text)
//! values. Texts are handled as character sequences: every position, length
//! and split point counts `char`s, never bytes.
//!
//! - Trimming: [`trim_left`], [`trim_right`], [`trim`]
//! - Case: [`capitalize`], [`uncapitalize`], [`kebab_case`]
//! - Rewriting: [`replace`], [`replace_all`], [`drop_char`]
//! - Queries: [`length_of`], [`starts_with`], [`ends_with`], [`string_to_union`]
//! - Parsing: [`percentage_parse`], [`absolute`]
//! - Composition: [`bem`]
//!
//! An operation that finds nothing to do returns its input unchanged (and
//! shares its characters) rather than failing.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::shape::Text;
//! use shapewright::text;
//!
//! let padded = Text::from("  hello world \n");
//! assert_eq!(text::trim(&padded), "hello world");
//!
//! let greeting = Text::from("hello world");
//! assert_eq!(text::replace(&greeting, "o", "0"), "hell0 world");
//! assert_eq!(text::replace_all(&greeting, "o", "0"), "hell0 w0rld");
//! assert_eq!(text::kebab_case(&Text::from("FooBarBaz")), "foo-bar-baz");
//! ```

mod case;
mod parse;
mod query;
mod replace;
mod trim;

pub use case::{bem, capitalize, kebab_case, uncapitalize};
pub use parse::{PercentageParts, absolute, percentage_parse};
pub use query::{ends_with, length_of, starts_with, string_to_union};
pub use replace::{drop_char, replace, replace_all};
pub use trim::{trim, trim_left, trim_right};

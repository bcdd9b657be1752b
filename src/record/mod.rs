//! Record Evaluator.
//!
//! Projections, modifier rewrites and combinations over
//! [`Record`](crate::shape::Record)s. Keys are compared exactly; every
//! operation returns a new record and leaves its inputs untouched.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`pick`], [`omit`] | only the listed keys / everything but the listed keys |
//! | [`partial_by_keys`], [`required_by_keys`] | the optional flag set / cleared on the selected keys |
//! | [`readonly`], [`readonly_by_keys`], [`mutable`] | the readonly flag set / cleared |
//! | [`merge`] | key union, the second record wins on collision |
//! | [`diff`] | fields whose key is defined on exactly one side |
//! | [`pick_by_type`], [`omit_by_type`] | fields whose value is / is not assignable to a target |
//! | [`append_field`] | one more field, overriding an existing key |
//! | [`flip`] | values become keys and keys become values |
//!
//! Shape-level operations ([`deep_readonly`], [`object_entries`],
//! [`look_up`], [`replace_keys`]) work on records nested in other shapes or
//! distributed over unions. [`Chainable`] builds a record one option at a
//! time.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::record;
//!
//! let todo = record! { "title" => "x", "description" => "y", "completed" => false };
//! assert_eq!(
//!     record::pick(&todo, &["title", "completed"]),
//!     record! { "title" => "x", "completed" => false }
//! );
//!
//! let left = record! { "a" => 1, "b" => 2 };
//! let right = record! { "b" => "two", "c" => 3 };
//! assert_eq!(
//!     record::merge(&left, &right),
//!     record! { "a" => 1, "b" => "two", "c" => 3 }
//! );
//! assert_eq!(record::diff(&left, &right), record! { "a" => 1, "c" => 3 });
//! ```

mod chainable;
mod combine;
mod modifiers;
mod projection;

pub use chainable::Chainable;
pub use combine::{append_field, diff, flip, merge, object_entries, replace_keys};
pub use modifiers::{
    deep_readonly, mutable, partial_by_keys, readonly, readonly_by_keys, required_by_keys,
};
pub use projection::{look_up, omit, omit_by_type, pick, pick_by_type};

use crate::shape::Text;

/// Returns `true` if `key` is selected. `None` selects every key.
fn is_selected(keys: Option<&[&str]>, key: &Text) -> bool {
    keys.is_none_or(|keys| keys.contains(&key.as_str()))
}

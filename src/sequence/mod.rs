//! Sequence Evaluator.
//!
//! Operations that decompose and rebuild fixed-arity sequences. Each one
//! takes a borrowed [`Sequence`](crate::shape::Sequence) and returns a new
//! value; the input is never modified.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`push`], [`unshift`] | sequence with one more element at the end / front |
//! | [`pop`], [`shift`] | sequence without the last / first element (identity on empty) |
//! | [`first`], [`last`] | the element, or [`Shape::Never`](crate::shape::Shape::Never) when empty |
//! | [`length`] | element count |
//! | [`reverse`] | elements in mirrored order |
//! | [`flatten`] | nested sequences spliced up to a [`FlattenDepth`] |
//! | [`concat`] | elements of both sequences in order |
//! | [`includes`] | whether some element is strictly equal to a target |
//!
//! Conversions towards unions and records ([`tuple_to_union`],
//! [`tuple_to_object`], [`tuple_to_nested_object`]) and per-element record
//! transformation ([`map_records`]) round off the evaluator, together with
//! [`permutation`] (every ordering of a union as a tuple) and [`minus_one`]
//! (decrement by tuple length).
//!
//! # Examples
//!
//! ```rust
//! use shapewright::prelude::*;
//! use shapewright::sequence;
//!
//! let numbers = sequence![1, 2, 3];
//! assert_eq!(sequence::push(&numbers, Shape::from(4)), sequence![1, 2, 3, 4]);
//! assert_eq!(sequence::pop(&numbers), sequence![1, 2]);
//! assert_eq!(sequence::first(&sequence![]), Shape::Never);
//!
//! let nested = sequence![1, sequence![2, sequence![3, sequence![4]], 5]];
//! assert_eq!(
//!     sequence::flatten(&nested, FlattenDepth::Unlimited),
//!     sequence![1, 2, 3, 4, 5]
//! );
//! ```

mod access;
mod convert;
mod count;
mod reorder;
mod search;

pub use access::{concat, first, last, length, pop, push, shift, unshift};
pub use convert::{map_records, tuple_to_nested_object, tuple_to_object, tuple_to_union};
pub use count::minus_one;
pub use reorder::{FlattenDepth, flatten, permutation, reverse};
pub use search::{any_of, includes, is_falsy};

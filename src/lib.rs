//! # shapewright
//!
//! Declarative structural transformations over immutable shapes.
//!
//! ## Overview
//!
//! Every operation in this crate takes one fully known, immutable input shape
//! and builds a new shape from it. Nothing is mutated in place and no
//! operation fails at run time: a transformation that does not apply yields a
//! designated no-match value ([`shape::Shape::Never`], `false`, or the input
//! unchanged) instead of an error.
//!
//! The evaluators share one recursion discipline: destructure the input into
//! a head and a remainder, recurse on the remainder while threading an
//! accumulator, and rebuild a value once the base case is reached.
//!
//! - **Sequence Evaluator**: push, pop, shift, unshift, reverse, flatten, concat, includes
//! - **Text Evaluator**: trim, capitalize, replace, kebab-case, percentage parsing
//! - **Record Evaluator**: pick, omit, partial/required by keys, merge, diff, flip
//! - **Tree Evaluator**: in-order traversal of binary trees
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence Evaluator (enables `record`)
//! - `text`: Text Evaluator
//! - `record`: Record Evaluator
//! - `tree`: Tree Evaluator (enables `sequence`)
//! - `signature`: Function and promise shape transformations
//! - `arc`: Share structure through `Arc` so shapes are `Send + Sync`
//! - `serde`: Serialization of every shape type
//! - `tracing`: Trace-level events for evaluation decisions
//! - `full`: Enable all evaluators and `serde`
//!
//! ## Example
//!
//! ```rust
//! use shapewright::prelude::*;
//! use shapewright::{record, sequence};
//!
//! let reversed = sequence::reverse(&sequence![1, "two", true]);
//! assert_eq!(reversed, sequence![true, "two", 1]);
//!
//! let picked = record::pick(&record! { "a" => 1, "b" => 2, "c" => 3 }, &["a", "c"]);
//! assert_eq!(picked, record! { "a" => 1, "c" => 3 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod macros;

/// Prelude module for convenient imports.
///
/// Re-exports the shape model and the evaluator modules so that operations
/// read as `sequence::reverse(...)` or `text::trim(...)`.
///
/// # Usage
///
/// ```rust
/// use shapewright::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ShapeError;
    pub use crate::shape::{
        Field, Function, Literal, Modifiers, Primitive, Record, Sequence, Shape, ShapeKind, Text,
        Union,
    };

    pub use crate::relation;

    #[cfg(feature = "sequence")]
    pub use crate::sequence;
    #[cfg(feature = "sequence")]
    pub use crate::sequence::FlattenDepth;

    #[cfg(feature = "text")]
    pub use crate::text;

    #[cfg(feature = "record")]
    pub use crate::record;

    #[cfg(feature = "tree")]
    pub use crate::tree;
    #[cfg(feature = "tree")]
    pub use crate::tree::Tree;

    #[cfg(feature = "signature")]
    pub use crate::signature;
}

pub mod control;
pub mod error;
pub mod relation;
pub mod shape;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "signature")]
pub mod signature;

//! Control structures for the evaluators.
//!
//! - [`Recursion`]: stack-safe recursion for evaluations that branch over
//!   nested structure (flattening nested sequences, walking both subtrees of
//!   a tree node)
//!
//! Linear evaluations (reverse, trim, length) are written as loops over
//! slice patterns and need no trampoline.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::control::Recursion;
//!
//! fn depth(levels: u64, accumulator: u64) -> Recursion<u64> {
//!     if levels == 0 {
//!         Recursion::done(accumulator)
//!     } else {
//!         Recursion::suspend(move || depth(levels - 1, accumulator + 1))
//!     }
//! }
//!
//! assert_eq!(depth(100_000, 0).run(), 100_000);
//! ```

mod recursion;

pub use recursion::Recursion;

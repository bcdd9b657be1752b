//! Reversing, flattening and permuting.

use std::collections::VecDeque;

use crate::control::Recursion;
use crate::shape::{Primitive, Sequence, Shape};

/// Returns the elements in mirrored order.
///
/// The head of the remaining input is peeled off and placed in front of an
/// accumulator that starts empty; once nothing remains, the accumulator is
/// the result.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
///
/// assert_eq!(
///     sequence::reverse(&sequence!["a", 1, sequence![true]]),
///     sequence![sequence![true], 1, "a"]
/// );
/// assert_eq!(sequence::reverse(&sequence![]), sequence![]);
/// ```
#[must_use]
pub fn reverse(sequence: &Sequence) -> Sequence {
    let mut accumulator: VecDeque<Shape> = VecDeque::with_capacity(sequence.len());
    let mut remaining = sequence.as_slice();
    while let [head, rest @ ..] = remaining {
        accumulator.push_front(head.clone());
        remaining = rest;
    }
    Sequence::from(Vec::from(accumulator))
}

/// How many levels of nested sequences [`flatten`] splices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlattenDepth {
    /// Splice nested sequences this many levels deep.
    Levels(usize),
    /// Splice until no element is a sequence.
    Unlimited,
}

impl FlattenDepth {
    /// The depth remaining inside a nested sequence, or `None` when nested
    /// sequences must be kept as they are.
    const fn descend(self) -> Option<Self> {
        match self {
            Self::Levels(0) => None,
            Self::Levels(levels) => Some(Self::Levels(levels - 1)),
            Self::Unlimited => Some(Self::Unlimited),
        }
    }
}

impl Default for FlattenDepth {
    fn default() -> Self {
        Self::Levels(1)
    }
}

/// Splices nested sequences into their parent up to `depth` levels.
///
/// Non-sequence elements are kept as they are and never consume depth; the
/// depth only decreases when the evaluation descends into a nested sequence.
/// Evaluation runs on [`Recursion`], so deeply nested input does not grow
/// the call stack.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::sequence::FlattenDepth;
///
/// let nested = sequence![1, sequence![2, sequence![3, sequence![4]], 5]];
/// assert_eq!(
///     sequence::flatten(&nested, FlattenDepth::default()),
///     sequence![1, 2, sequence![3, sequence![4]], 5]
/// );
/// assert_eq!(
///     sequence::flatten(&nested, FlattenDepth::Levels(2)),
///     sequence![1, 2, 3, sequence![4], 5]
/// );
/// assert_eq!(
///     sequence::flatten(&nested, FlattenDepth::Unlimited),
///     sequence![1, 2, 3, 4, 5]
/// );
/// ```
#[must_use]
pub fn flatten(sequence: &Sequence, depth: FlattenDepth) -> Sequence {
    let accumulator = Vec::with_capacity(sequence.len());
    Sequence::from(flatten_from(sequence.clone(), 0, depth, accumulator).run())
}

fn flatten_from(
    sequence: Sequence,
    start: usize,
    depth: FlattenDepth,
    mut accumulator: Vec<Shape>,
) -> Recursion<Vec<Shape>> {
    let mut index = start;
    while let Some(element) = sequence.get(index).cloned() {
        match (element, depth.descend()) {
            (Shape::Sequence(nested), Some(inner_depth)) => {
                return Recursion::suspend(move || {
                    flatten_from(nested, 0, inner_depth, accumulator)
                })
                .and_then(move |accumulator| {
                    flatten_from(sequence, index + 1, depth, accumulator)
                });
            }
            (element, _) => accumulator.push(element),
        }
        index += 1;
    }
    Recursion::done(accumulator)
}

/// Lists every ordering of the members of a union as a tuple.
///
/// Each member appears exactly once per tuple, and `boolean` contributes
/// `true` and `false` as separate members. The result is the union of all
/// orderings, so `n` distinct members give `n!` tuples. A non-union shape
/// yields its one-element tuple and `never` yields the empty tuple.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// let letters = Shape::union([Shape::from("a"), Shape::from("b")]);
/// assert_eq!(
///     sequence::permutation(&letters),
///     Shape::union([
///         Shape::from(sequence!["a", "b"]),
///         Shape::from(sequence!["b", "a"]),
///     ])
/// );
/// assert_eq!(sequence::permutation(&Shape::Never), Shape::from(sequence![]));
/// ```
#[must_use]
pub fn permutation(shape: &Shape) -> Shape {
    let members: Vec<Shape> = shape.members().iter().flat_map(expand_boolean).collect();
    let mut orderings = Vec::new();
    let mut pending = vec![(Vec::with_capacity(members.len()), members)];
    while let Some((prefix, remaining)) = pending.pop() {
        if remaining.is_empty() {
            orderings.push(Shape::Sequence(Sequence::from(prefix)));
            continue;
        }
        for index in (0..remaining.len()).rev() {
            let mut next_prefix = prefix.clone();
            let mut next_remaining = remaining.clone();
            next_prefix.push(next_remaining.remove(index));
            pending.push((next_prefix, next_remaining));
        }
    }
    Shape::union(orderings)
}

fn expand_boolean(member: &Shape) -> Vec<Shape> {
    match member {
        Shape::Primitive(Primitive::Boolean) => vec![Shape::from(true), Shape::from(false)],
        other => vec![other.clone()],
    }
}

//! Adding and removing elements at either end.

use crate::shape::{Sequence, Shape};

/// Returns a new sequence with `value` appended.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// let pushed = sequence::push(&sequence![1, 2], Shape::from("three"));
/// assert_eq!(pushed, sequence![1, 2, "three"]);
/// ```
#[must_use]
pub fn push(sequence: &Sequence, value: Shape) -> Sequence {
    sequence
        .iter()
        .cloned()
        .chain(std::iter::once(value))
        .collect()
}

/// Returns a new sequence with `value` prepended.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// assert_eq!(sequence::unshift(&sequence![1, 2], Shape::from(0)), sequence![0, 1, 2]);
/// ```
#[must_use]
pub fn unshift(sequence: &Sequence, value: Shape) -> Sequence {
    std::iter::once(value)
        .chain(sequence.iter().cloned())
        .collect()
}

/// Returns the sequence without its last element.
///
/// An empty sequence is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
///
/// assert_eq!(sequence::pop(&sequence![1, 2, 3]), sequence![1, 2]);
/// assert_eq!(sequence::pop(&sequence![]), sequence![]);
/// ```
#[must_use]
pub fn pop(sequence: &Sequence) -> Sequence {
    match sequence.as_slice() {
        [init @ .., _] => Sequence::from(init),
        [] => sequence.clone(),
    }
}

/// Returns the sequence without its first element.
///
/// An empty sequence is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
///
/// assert_eq!(sequence::shift(&sequence![1, 2, 3]), sequence![2, 3]);
/// assert_eq!(sequence::shift(&sequence![]), sequence![]);
/// ```
#[must_use]
pub fn shift(sequence: &Sequence) -> Sequence {
    match sequence.as_slice() {
        [_, rest @ ..] => Sequence::from(rest),
        [] => sequence.clone(),
    }
}

/// Returns the first element, or [`Shape::Never`] for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// assert_eq!(sequence::first(&sequence!["a", "b"]), Shape::from("a"));
/// assert_eq!(sequence::first(&sequence![]), Shape::Never);
/// ```
#[must_use]
pub fn first(sequence: &Sequence) -> Shape {
    match sequence.as_slice() {
        [head, ..] => head.clone(),
        [] => {
            trace_event!("first of an empty sequence");
            Shape::Never
        }
    }
}

/// Returns the last element, or [`Shape::Never`] for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// assert_eq!(sequence::last(&sequence!["a", "b"]), Shape::from("b"));
/// assert_eq!(sequence::last(&sequence![]), Shape::Never);
/// ```
#[must_use]
pub fn last(sequence: &Sequence) -> Shape {
    match sequence.as_slice() {
        [.., tail] => tail.clone(),
        [] => {
            trace_event!("last of an empty sequence");
            Shape::Never
        }
    }
}

/// Returns the number of elements.
#[inline]
#[must_use]
pub fn length(sequence: &Sequence) -> usize {
    sequence.len()
}

/// Returns the elements of `left` followed by the elements of `right`.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
///
/// assert_eq!(
///     sequence::concat(&sequence![1], &sequence![2, sequence![3]]),
///     sequence![1, 2, sequence![3]]
/// );
/// ```
#[must_use]
pub fn concat(left: &Sequence, right: &Sequence) -> Sequence {
    left.iter().chain(right.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers(values: &[i64]) -> Sequence {
        values.iter().copied().map(Shape::number).collect()
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[])]
    #[case(&[1, 2, 3], &[1, 2])]
    fn pop_drops_the_last_element(#[case] input: &[i64], #[case] expected: &[i64]) {
        assert_eq!(pop(&numbers(input)), numbers(expected));
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[])]
    #[case(&[1, 2, 3], &[2, 3])]
    fn shift_drops_the_first_element(#[case] input: &[i64], #[case] expected: &[i64]) {
        assert_eq!(shift(&numbers(input)), numbers(expected));
    }

    #[rstest]
    fn push_leaves_the_input_untouched() {
        let original = numbers(&[1, 2]);
        let pushed = push(&original, Shape::number(3));
        assert_eq!(original, numbers(&[1, 2]));
        assert_eq!(pushed, numbers(&[1, 2, 3]));
    }

    #[rstest]
    fn single_element_is_both_first_and_last() {
        let single = numbers(&[7]);
        assert_eq!(first(&single), Shape::number(7));
        assert_eq!(last(&single), Shape::number(7));
    }
}

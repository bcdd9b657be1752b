//! Function and promise shape transformations.
//!
//! These operate on [`Function`] signatures and on
//! [`Shape::Promise`] wrappers: extracting parameters and return shapes,
//! rewriting parameter tuples, and resolving promises to the shape they
//! settle with.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::sequence;
//! use shapewright::shape::{Function, Primitive, Shape};
//! use shapewright::signature;
//!
//! let function = Function::new(sequence![1, "a"], Shape::Primitive(Primitive::Boolean));
//! assert_eq!(signature::parameters(&function), &sequence![1, "a"]);
//! assert_eq!(
//!     signature::flip_arguments(&function),
//!     Function::new(sequence!["a", 1], Shape::Primitive(Primitive::Boolean))
//! );
//!
//! let nested = Shape::promise(Shape::promise(Shape::from(1)));
//! assert_eq!(signature::awaited(&nested), Shape::from(1));
//! ```

use crate::shape::{Function, Sequence, Shape};

/// Returns the parameter tuple of `function`.
#[inline]
#[must_use]
pub const fn parameters(function: &Function) -> &Sequence {
    function.parameters()
}

/// Returns the return shape of `function`.
#[inline]
#[must_use]
pub fn return_type(function: &Function) -> &Shape {
    function.returns()
}

/// Appends `argument` to the parameters of `function`.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::{Function, Primitive, Shape};
/// use shapewright::signature;
///
/// let function = Function::new(sequence![Shape::Primitive(Primitive::Number)], Shape::Void);
/// let appended = signature::append_argument(&function, Shape::Primitive(Primitive::Boolean));
/// assert_eq!(
///     appended.to_string(),
///     "(...args: [number, boolean]) => void"
/// );
/// ```
#[must_use]
pub fn append_argument(function: &Function, argument: Shape) -> Function {
    let parameters: Sequence = function
        .parameters()
        .iter()
        .cloned()
        .chain(std::iter::once(argument))
        .collect();
    Function::new(parameters, function.returns().clone())
}

/// Reverses the parameters of `function`, keeping its return shape.
#[must_use]
pub fn flip_arguments(function: &Function) -> Function {
    let parameters: Sequence = function.parameters().iter().rev().cloned().collect();
    Function::new(parameters, function.returns().clone())
}

/// Resolves a promise to the shape it settles with.
///
/// Nested promises are unwrapped until a non-promise shape remains, and
/// unions are resolved member by member. Any other shape is returned as it
/// is.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::{Primitive, Shape};
/// use shapewright::signature;
///
/// let string = Shape::Primitive(Primitive::String);
/// assert_eq!(signature::awaited(&Shape::promise(string.clone())), string);
/// assert_eq!(signature::awaited(&string), string);
///
/// let mixed = Shape::promise(Shape::union([Shape::from(1), Shape::promise(Shape::from(2))]));
/// assert_eq!(signature::awaited(&mixed), Shape::union([Shape::from(1), Shape::from(2)]));
/// ```
#[must_use]
pub fn awaited(shape: &Shape) -> Shape {
    let mut current = shape;
    while let Shape::Promise(inner) = current {
        current = &**inner;
    }
    match current {
        Shape::Union(union) => Shape::union(union.members().iter().map(awaited)),
        settled => settled.clone(),
    }
}

/// Returns a promise of the tuple of every element resolved.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
/// use shapewright::signature;
///
/// let values = sequence![1, Shape::promise(Shape::from("a")), Shape::promise(Shape::promise(Shape::from(true)))];
/// assert_eq!(
///     signature::promise_all(&values),
///     Shape::promise(Shape::from(sequence![1, "a", true]))
/// );
/// ```
#[must_use]
pub fn promise_all(values: &Sequence) -> Shape {
    Shape::promise(Shape::Sequence(values.iter().map(awaited).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Primitive;
    use rstest::rstest;

    fn function(parameters: Vec<Shape>) -> Function {
        Function::new(Sequence::from(parameters), Shape::Primitive(Primitive::String))
    }

    #[rstest]
    fn flip_arguments_of_empty_parameters_is_identity() {
        let empty = function(Vec::new());
        assert_eq!(flip_arguments(&empty), empty);
    }

    #[rstest]
    fn flip_arguments_twice_restores_the_signature() {
        let original = function(vec![Shape::number(1), Shape::from("a"), Shape::Null]);
        assert_eq!(flip_arguments(&flip_arguments(&original)), original);
    }

    #[rstest]
    fn return_type_is_kept_by_rewrites() {
        let original = function(vec![Shape::number(1)]);
        let appended = append_argument(&original, Shape::Null);
        assert_eq!(return_type(&appended), return_type(&original));
        assert_eq!(parameters(&appended).len(), 2);
    }

    #[rstest]
    #[case(Shape::Never, Shape::Never)]
    #[case(Shape::promise(Shape::Void), Shape::Void)]
    #[case(Shape::array(Shape::promise(Shape::Null)), Shape::array(Shape::promise(Shape::Null)))]
    fn awaited_cases(#[case] input: Shape, #[case] expected: Shape) {
        assert_eq!(awaited(&input), expected);
    }

    #[rstest]
    fn promise_all_of_empty_sequence() {
        assert_eq!(
            promise_all(&Sequence::new()),
            Shape::promise(Shape::Sequence(Sequence::new()))
        );
    }
}

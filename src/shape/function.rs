//! Function signatures.

use std::fmt;

use super::{ReferenceCounter, Sequence, Shape};

/// A function signature: a parameter tuple and a return shape.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::{Function, Primitive, Shape};
///
/// let function = Function::new(
///     sequence![Shape::Primitive(Primitive::Number)],
///     Shape::Primitive(Primitive::String),
/// );
/// assert_eq!(function.to_string(), "(...args: [number]) => string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    parameters: Sequence,
    returns: ReferenceCounter<Shape>,
}

impl Function {
    /// Creates a signature from its parameters and return shape.
    #[must_use]
    pub fn new(parameters: Sequence, returns: Shape) -> Self {
        Self {
            parameters,
            returns: ReferenceCounter::new(returns),
        }
    }

    /// Returns the parameter tuple.
    #[inline]
    #[must_use]
    pub const fn parameters(&self) -> &Sequence {
        &self.parameters
    }

    /// Returns the return shape.
    #[inline]
    #[must_use]
    pub fn returns(&self) -> &Shape {
        &self.returns
    }
}

impl TryFrom<Shape> for Function {
    type Error = crate::error::ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Function(function) => Ok(function),
            other => Err(crate::error::ShapeError::KindMismatch {
                expected: super::ShapeKind::Function,
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "(...args: {}) => {}",
            self.parameters, self.returns
        )
    }
}

//! The shape model every evaluator works on.
//!
//! A [`Shape`] describes the structure of a value rather than the value
//! itself: `number` and the literal `1` are different shapes, as are `true`
//! and `boolean`. Shapes are immutable; composite shapes share their parts
//! through a reference counter, so cloning a shape never copies its
//! children.
//!
//! - [`Sequence`]: fixed-arity tuple of shapes
//! - [`Text`]: character sequence used for string literals and record keys
//! - [`Record`]: keyed fields with `optional` and `readonly` modifiers
//! - [`Union`]: normalized set of alternative shapes
//! - [`Function`]: parameter tuple and return shape
//!
//! # Examples
//!
//! ```rust
//! use shapewright::shape::{Literal, Primitive, Shape};
//!
//! let one = Shape::from(1);
//! assert_eq!(one, Shape::Literal(Literal::Number(1)));
//! assert_ne!(one, Shape::Primitive(Primitive::Number));
//! assert_eq!(one.to_string(), "1");
//!
//! let either = Shape::union([Shape::from("a"), Shape::from("b")]);
//! assert_eq!(either.to_string(), "\"a\" | \"b\"");
//! ```

use std::fmt;

mod function;
mod record;
mod sequence;
mod text;
mod union;

pub use function::Function;
pub use record::{Field, Modifiers, Record, RecordIterator};
pub use sequence::{Sequence, SequenceIterator};
pub use text::Text;
pub use union::Union;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which makes every shape `Send + Sync`.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Shape: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Shape: Send, Sync);

// =============================================================================
// Primitive and Literal
// =============================================================================

/// The built-in primitive shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `bigint`
    BigInt,
    /// `symbol`
    Symbol,
    /// `object`
    Object,
}

impl Primitive {
    const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Object => "object",
        }
    }
}

/// A single literal value used as a shape.
///
/// Number literals are integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// `true` or `false`
    Boolean(bool),
    /// An integer literal such as `42`.
    Number(i64),
    /// A string literal such as `"abc"`.
    String(Text),
}

impl Literal {
    /// Returns the primitive this literal belongs to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::shape::{Literal, Primitive};
    ///
    /// assert_eq!(Literal::Boolean(true).primitive(), Primitive::Boolean);
    /// assert_eq!(Literal::Number(7).primitive(), Primitive::Number);
    /// ```
    #[must_use]
    pub const fn primitive(&self) -> Primitive {
        match self {
            Self::Boolean(_) => Primitive::Boolean,
            Self::Number(_) => Primitive::Number,
            Self::String(_) => Primitive::String,
        }
    }

    /// Renders the literal the way it appears inside a template string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::shape::Literal;
    ///
    /// assert_eq!(Literal::Number(-3).to_text().as_str(), "-3");
    /// assert_eq!(Literal::Boolean(false).to_text().as_str(), "false");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> Text {
        match self {
            Self::Boolean(value) => Text::from(value.to_string()),
            Self::Number(value) => Text::from(value.to_string()),
            Self::String(text) => text.clone(),
        }
    }
}

// =============================================================================
// Shape
// =============================================================================

/// A structural description of a value.
///
/// `Shape::Never` doubles as the no-match marker: operations that find
/// nothing to return (the first element of an empty sequence, for instance)
/// return it instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// The empty shape. Nothing is assignable to it except itself.
    Never,
    /// The top shape. Everything is assignable to it.
    Unknown,
    /// The unchecked shape. Assignable to and from everything except `Never`.
    Any,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `void`
    Void,
    /// A primitive such as `number` or `string`.
    Primitive(Primitive),
    /// A literal such as `1`, `"a"` or `true`.
    Literal(Literal),
    /// A fixed-arity tuple.
    Sequence(Sequence),
    /// A variable-length list whose elements all share one shape.
    Array(ReferenceCounter<Self>),
    /// A keyed record.
    Record(Record),
    /// A normalized union of at least two shapes.
    Union(Union),
    /// A function signature.
    Function(Function),
    /// A promise resolving to the inner shape.
    Promise(ReferenceCounter<Self>),
}

/// The discriminant of a [`Shape`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Shape::Never`]
    Never,
    /// [`Shape::Unknown`]
    Unknown,
    /// [`Shape::Any`]
    Any,
    /// [`Shape::Null`]
    Null,
    /// [`Shape::Undefined`]
    Undefined,
    /// [`Shape::Void`]
    Void,
    /// [`Shape::Primitive`]
    Primitive,
    /// [`Shape::Literal`]
    Literal,
    /// [`Shape::Sequence`]
    Sequence,
    /// [`Shape::Array`]
    Array,
    /// [`Shape::Record`]
    Record,
    /// [`Shape::Union`]
    Union,
    /// [`Shape::Function`]
    Function,
    /// [`Shape::Promise`]
    Promise,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Never => "never",
            Self::Unknown => "unknown",
            Self::Any => "any",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Primitive => "primitive",
            Self::Literal => "literal",
            Self::Sequence => "sequence",
            Self::Array => "array",
            Self::Record => "record",
            Self::Union => "union",
            Self::Function => "function",
            Self::Promise => "promise",
        };
        formatter.write_str(name)
    }
}

impl Shape {
    /// Builds the normalized union of the given members.
    ///
    /// See [`Union`] for the normalization rules. No members yield
    /// [`Shape::Never`] and a single distinct member yields that member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::shape::{Primitive, Shape};
    ///
    /// assert_eq!(Shape::union([]), Shape::Never);
    /// assert_eq!(Shape::union([Shape::from(1), Shape::from(1)]), Shape::from(1));
    /// assert_eq!(
    ///     Shape::union([Shape::from(true), Shape::from(false)]),
    ///     Shape::Primitive(Primitive::Boolean)
    /// );
    /// ```
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Union::normalize(members)
    }

    /// Builds an integer literal shape.
    #[inline]
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Literal(Literal::Number(value))
    }

    /// Builds a string literal shape.
    #[inline]
    pub fn string(value: impl Into<Text>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Builds an array shape `element[]`.
    #[inline]
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(ReferenceCounter::new(element))
    }

    /// Builds a promise shape `Promise<inner>`.
    #[inline]
    #[must_use]
    pub fn promise(inner: Self) -> Self {
        Self::Promise(ReferenceCounter::new(inner))
    }

    /// Returns the discriminant of this shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Never => ShapeKind::Never,
            Self::Unknown => ShapeKind::Unknown,
            Self::Any => ShapeKind::Any,
            Self::Null => ShapeKind::Null,
            Self::Undefined => ShapeKind::Undefined,
            Self::Void => ShapeKind::Void,
            Self::Primitive(_) => ShapeKind::Primitive,
            Self::Literal(_) => ShapeKind::Literal,
            Self::Sequence(_) => ShapeKind::Sequence,
            Self::Array(_) => ShapeKind::Array,
            Self::Record(_) => ShapeKind::Record,
            Self::Union(_) => ShapeKind::Union,
            Self::Function(_) => ShapeKind::Function,
            Self::Promise(_) => ShapeKind::Promise,
        }
    }

    /// Returns `true` for the no-match marker [`Shape::Never`].
    #[inline]
    #[must_use]
    pub const fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Returns the sequence if this shape is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the record if this shape is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the text if this shape is a string literal.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Literal(Literal::String(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the union members, or a one-element slice holding `self`.
    ///
    /// Operations that distribute over unions iterate this slice.
    #[must_use]
    pub fn members(&self) -> &[Self] {
        match self {
            Self::Union(union) => union.members(),
            Self::Never => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// Converts a property-key-like literal into its key text.
    ///
    /// String, number and boolean literals stringify the way template
    /// literals do. Every other shape is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidKey`](crate::error::ShapeError::InvalidKey)
    /// when the shape has no key form.
    pub fn to_key(&self) -> Result<Text, crate::error::ShapeError> {
        match self {
            Self::Literal(literal) => Ok(literal.to_text()),
            other => Err(crate::error::ShapeError::InvalidKey {
                found: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Shape {
    fn from(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }
}

impl From<i64> for Shape {
    fn from(value: i64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for Shape {
    fn from(value: i32) -> Self {
        Self::number(i64::from(value))
    }
}

impl From<&str> for Shape {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Shape {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<Text> for Shape {
    fn from(value: Text) -> Self {
        Self::Literal(Literal::String(value))
    }
}

impl From<Literal> for Shape {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Primitive> for Shape {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<Sequence> for Shape {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<Record> for Shape {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Union> for Shape {
    fn from(value: Union) -> Self {
        Self::Union(value)
    }
}

impl From<Function> for Shape {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for Literal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Number(value) => write!(formatter, "{value}"),
            Self::String(text) => write!(formatter, "\"{}\"", text.as_str().escape_debug()),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => formatter.write_str("never"),
            Self::Unknown => formatter.write_str("unknown"),
            Self::Any => formatter.write_str("any"),
            Self::Null => formatter.write_str("null"),
            Self::Undefined => formatter.write_str("undefined"),
            Self::Void => formatter.write_str("void"),
            Self::Primitive(primitive) => write!(formatter, "{primitive}"),
            Self::Literal(literal) => write!(formatter, "{literal}"),
            Self::Sequence(sequence) => write!(formatter, "{sequence}"),
            Self::Array(element) => match element.as_ref() {
                Self::Union(_) | Self::Function(_) => write!(formatter, "({element})[]"),
                _ => write!(formatter, "{element}[]"),
            },
            Self::Record(record) => write!(formatter, "{record}"),
            Self::Union(union) => write!(formatter, "{union}"),
            Self::Function(function) => write!(formatter, "{function}"),
            Self::Promise(inner) => write!(formatter, "Promise<{inner}>"),
        }
    }
}

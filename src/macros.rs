//! Construction macros and the crate-internal tracing hook.

/// Builds a [`Sequence`](crate::shape::Sequence) from a list of values.
///
/// Every element is converted with [`Shape::from`](crate::shape::Shape), so
/// integers, booleans, string slices and other shapes can be mixed freely.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::shape::Shape;
///
/// let nested = sequence![1, sequence![2, 3], "four"];
/// assert_eq!(nested.len(), 3);
/// assert_eq!(nested.get(2), Some(&Shape::from("four")));
///
/// let empty = sequence![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::shape::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::shape::Sequence as ::core::iter::FromIterator<$crate::shape::Shape>>::from_iter([
            $($crate::shape::Shape::from($element)),+
        ])
    };
}

/// Builds a [`Record`](crate::shape::Record) from `key => value` pairs.
///
/// Fields are created without modifiers. A repeated key overrides the earlier
/// value while keeping its position.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::shape::Shape;
///
/// let point = record! { "x" => 1, "y" => 2 };
/// assert_eq!(point.get("y"), Some(&Shape::from(2)));
///
/// let overridden = record! { "x" => 1, "x" => 3 };
/// assert_eq!(overridden.len(), 1);
/// assert_eq!(overridden.get("x"), Some(&Shape::from(3)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::shape::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::shape::Record as ::core::iter::FromIterator<($crate::shape::Text, $crate::shape::Shape)>>::from_iter([
            $(($crate::shape::Text::from($key), $crate::shape::Shape::from($value))),+
        ])
    };
}

/// Emits a trace-level event when the `tracing` feature is enabled.
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}

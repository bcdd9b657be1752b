//! Incremental record building.

use super::{append_field, omit};
use crate::shape::{Record, Shape, Text};

/// A record builder that extends its configuration one option at a time.
///
/// Each [`option`](Chainable::option) call drops any earlier field with the
/// same key and appends the new one, so a redefined key moves to the end
/// and carries only its latest value.
///
/// # Examples
///
/// ```rust
/// use shapewright::record;
/// use shapewright::record::Chainable;
/// use shapewright::shape::{Primitive, Shape};
///
/// let config = Chainable::new()
///     .option("foo", 123)
///     .option("name", "type-safe")
///     .option("bar", record! { "value" => "Hello World" });
/// assert_eq!(
///     config.get(),
///     &record! {
///         "foo" => 123,
///         "name" => "type-safe",
///         "bar" => record! { "value" => "Hello World" },
///     }
/// );
///
/// let redefined = config.option("foo", Shape::Primitive(Primitive::String));
/// assert_eq!(redefined.get().get("foo"), Some(&Shape::Primitive(Primitive::String)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chainable {
    config: Record,
}

impl Chainable {
    /// Creates a builder with an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder whose configuration also maps `key` to `value`.
    #[must_use]
    pub fn option(&self, key: impl Into<Text>, value: impl Into<Shape>) -> Self {
        let key = key.into();
        let rest = omit(&self.config, &[key.as_str()]);
        Self {
            config: append_field(&rest, key, value.into()),
        }
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub const fn get(&self) -> &Record {
        &self.config
    }
}

impl From<Chainable> for Record {
    fn from(chainable: Chainable) -> Self {
        chainable.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn redefined_key_moves_to_the_end() {
        let config = Chainable::new().option("a", 1).option("b", 2).option("a", "x");
        let keys: Vec<&str> = config.get().keys().map(Text::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(config.get().get("a"), Some(&Shape::from("x")));
    }

    #[rstest]
    fn earlier_builders_are_untouched() {
        let base = Chainable::new().option("a", 1);
        let _extended = base.option("b", 2);
        assert_eq!(base.get().len(), 1);
    }
}

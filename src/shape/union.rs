//! Normalized unions of shapes.

use std::fmt;

use smallvec::SmallVec;

use super::{Literal, Primitive, ReferenceCounter, Shape};

/// A normalized union of at least two distinct shapes.
///
/// A `Union` can only be obtained through [`Shape::union`] (or
/// [`Union::normalize`]), which enforces the normalization rules:
///
/// 1. Nested unions are flattened and `never` members are dropped.
/// 2. `any` absorbs every other member, then `unknown` does.
/// 3. Duplicates (by strict structural equality) are removed, keeping the
///    first occurrence.
/// 4. `true | false` folds into `boolean`.
/// 5. Literals whose primitive is also a member are dropped.
///
/// Zero remaining members normalize to [`Shape::Never`] and a single member
/// to itself, so a `Union` always has at least two members. Equality ignores
/// member order.
///
/// # Examples
///
/// ```rust
/// use shapewright::shape::{Primitive, Shape};
///
/// let union = Shape::union([
///     Shape::from("a"),
///     Shape::Primitive(Primitive::String),
///     Shape::from(1),
/// ]);
/// assert_eq!(union.to_string(), "string | 1");
///
/// let reordered = Shape::union([Shape::from(1), Shape::Primitive(Primitive::String)]);
/// assert_eq!(union, reordered);
/// ```
#[derive(Clone, Eq)]
pub struct Union {
    members: ReferenceCounter<[Shape]>,
}

impl Union {
    /// Normalizes `members` into a shape.
    ///
    /// This is the implementation behind [`Shape::union`].
    pub fn normalize<I>(members: I) -> Shape
    where
        I: IntoIterator<Item = Shape>,
    {
        let mut collected: SmallVec<[Shape; 8]> = SmallVec::new();
        for member in members {
            match member {
                Shape::Never => {}
                Shape::Union(union) => {
                    for nested in union.members.iter() {
                        push_distinct(&mut collected, nested.clone());
                    }
                }
                other => push_distinct(&mut collected, other),
            }
        }

        if collected.iter().any(|member| matches!(member, Shape::Any)) {
            return Shape::Any;
        }
        if collected.iter().any(|member| matches!(member, Shape::Unknown)) {
            return Shape::Unknown;
        }

        fold_booleans(&mut collected);
        drop_covered_literals(&mut collected);

        match collected.len() {
            0 => Shape::Never,
            1 => collected.remove(0),
            _ => Shape::Union(Self {
                members: ReferenceCounter::from(collected.into_vec()),
            }),
        }
    }

    /// Returns the members in first-occurrence order.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Shape] {
        &self.members
    }

    /// Returns the number of members (always at least two).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; a union has at least two members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if some member is strictly equal to `shape`.
    #[must_use]
    pub fn contains(&self, shape: &Shape) -> bool {
        self.members.iter().any(|member| member == shape)
    }
}

fn push_distinct(collected: &mut SmallVec<[Shape; 8]>, member: Shape) {
    if !collected.contains(&member) {
        collected.push(member);
    }
}

fn fold_booleans(collected: &mut SmallVec<[Shape; 8]>) {
    let truthy = Shape::Literal(Literal::Boolean(true));
    let falsy = Shape::Literal(Literal::Boolean(false));
    let (Some(truthy_position), Some(falsy_position)) = (
        collected.iter().position(|member| *member == truthy),
        collected.iter().position(|member| *member == falsy),
    ) else {
        return;
    };
    let first = truthy_position.min(falsy_position);
    let second = truthy_position.max(falsy_position);
    collected.remove(second);
    let boolean = Shape::Primitive(Primitive::Boolean);
    if collected.contains(&boolean) {
        collected.remove(first);
    } else {
        collected[first] = boolean;
    }
}

fn drop_covered_literals(collected: &mut SmallVec<[Shape; 8]>) {
    let primitives: SmallVec<[Primitive; 4]> = collected
        .iter()
        .filter_map(|member| match member {
            Shape::Primitive(primitive) => Some(*primitive),
            _ => None,
        })
        .collect();
    if primitives.is_empty() {
        return;
    }
    collected.retain(|member| match member {
        Shape::Literal(literal) => !primitives.contains(&literal.primitive()),
        _ => true,
    });
}

impl PartialEq for Union {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.members.iter().all(|member| other.contains(member))
    }
}

impl TryFrom<Shape> for Union {
    type Error = crate::error::ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Union(union) => Ok(union),
            other => Err(crate::error::ShapeError::KindMismatch {
                expected: super::ShapeKind::Union,
                found: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl fmt::Display for Union {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" | ")?;
            }
            match member {
                Shape::Function(_) => write!(formatter, "({member})")?,
                _ => write!(formatter, "{member}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Union {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.members.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Union {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for member in self.members.iter() {
            sequence.serialize_element(member)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Union {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let members = Vec::<Shape>::deserialize(deserializer)?;
        match Self::normalize(members) {
            Shape::Union(union) => Ok(union),
            other => Err(serde::de::Error::custom(format!(
                "expected at least two distinct union members, normalized to {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nested_unions_are_flattened() {
        let inner = Shape::union([Shape::number(1), Shape::number(2)]);
        let outer = Shape::union([inner, Shape::number(3)]);
        assert_eq!(
            outer.members(),
            &[Shape::number(1), Shape::number(2), Shape::number(3)]
        );
    }

    #[rstest]
    fn never_members_are_dropped() {
        assert_eq!(Shape::union([Shape::Never, Shape::Null]), Shape::Null);
    }

    #[rstest]
    #[case(Shape::Any)]
    #[case(Shape::Unknown)]
    fn top_shapes_absorb_members(#[case] top: Shape) {
        assert_eq!(Shape::union([Shape::number(1), top.clone()]), top);
    }

    #[rstest]
    fn boolean_fold_keeps_first_position() {
        let union = Shape::union([
            Shape::Null,
            Shape::from(false),
            Shape::number(1),
            Shape::from(true),
        ]);
        assert_eq!(
            union.members(),
            &[
                Shape::Null,
                Shape::Primitive(Primitive::Boolean),
                Shape::number(1)
            ]
        );
    }

    #[rstest]
    fn literals_covered_by_their_primitive_are_dropped() {
        let union = Shape::union([
            Shape::from("a"),
            Shape::number(1),
            Shape::Primitive(Primitive::String),
        ]);
        assert_eq!(
            union.members(),
            &[Shape::number(1), Shape::Primitive(Primitive::String)]
        );
    }
}

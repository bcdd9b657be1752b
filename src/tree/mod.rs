//! Tree Evaluator.
//!
//! Binary trees whose nodes hold a [`Shape`] and two independently optional
//! children, and their in-order decomposition into a flat
//! [`Sequence`](crate::shape::Sequence).
//!
//! A tree converts from and to the record encoding used by tree-shaped
//! data, `{ val, left, right }`, where an absent child is `null`.
//!
//! # Examples
//!
//! ```rust
//! use shapewright::{record, sequence, tree};
//! use shapewright::shape::Shape;
//! use shapewright::tree::Tree;
//!
//! let encoded = Shape::from(record! {
//!     "val" => 1,
//!     "left" => Shape::Null,
//!     "right" => record! {
//!         "val" => 2,
//!         "left" => record! { "val" => 3, "left" => Shape::Null, "right" => Shape::Null },
//!         "right" => Shape::Null,
//!     },
//! });
//!
//! let tree = Tree::try_from(&encoded).unwrap();
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree::inorder_traversal(&tree), sequence![1, 3, 2]);
//! assert_eq!(tree.to_shape(), encoded);
//! ```

mod traversal;

pub use traversal::inorder_traversal;

use crate::error::ShapeError;
use crate::shape::{Field, Record, ReferenceCounter, Shape, ShapeKind};

/// An immutable binary tree.
///
/// Subtrees are shared through a reference counter, so building a node from
/// existing trees never copies them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    root: Option<ReferenceCounter<TreeNode>>,
}

/// A node of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    value: Shape,
    left: Tree,
    right: Tree,
}

impl TreeNode {
    /// Returns the value held by this node.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Shape {
        &self.value
    }

    /// Returns the left subtree.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> &Tree {
        &self.left
    }

    /// Returns the right subtree.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> &Tree {
        &self.right
    }
}

impl Tree {
    /// Creates the empty tree.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// Creates a tree holding a single node without children.
    #[must_use]
    pub fn leaf(value: impl Into<Shape>) -> Self {
        Self::node(value, Self::empty(), Self::empty())
    }

    /// Creates a tree from a root value and two subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::tree::Tree;
    ///
    /// let tree = Tree::node(2, Tree::leaf(1), Tree::leaf(3));
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn node(value: impl Into<Shape>, left: Self, right: Self) -> Self {
        Self {
            root: Some(ReferenceCounter::new(TreeNode {
                value: value.into(),
                left,
                right,
            })),
        }
    }

    /// Returns the root node, or `None` for the empty tree.
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of present nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::tree::Tree;
    ///
    /// assert_eq!(Tree::empty().len(), 0);
    /// assert_eq!(Tree::node(1, Tree::leaf(2), Tree::empty()).len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            if let Some(node) = tree.root() {
                count += 1;
                pending.push(&node.left);
                pending.push(&node.right);
            }
        }
        count
    }

    /// Encodes the tree as nested `{ val, left, right }` records.
    ///
    /// The empty tree is encoded as `null`.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        self.root().map_or(Shape::Null, |node| {
            Shape::Record(Record::from_fields([
                Field::new("val", node.value.clone()),
                Field::new("left", node.left.to_shape()),
                Field::new("right", node.right.to_shape()),
            ]))
        })
    }
}

impl From<&Tree> for Shape {
    fn from(tree: &Tree) -> Self {
        tree.to_shape()
    }
}

fn required_field<'a>(record: &'a Record, key: &'static str) -> Result<&'a Shape, ShapeError> {
    record
        .get(key)
        .ok_or(ShapeError::MalformedTree { missing: key })
}

impl TryFrom<&Shape> for Tree {
    type Error = ShapeError;

    /// Decodes the `{ val, left, right }` record encoding.
    ///
    /// `null` decodes to the empty tree. Extra fields on a node record are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::MalformedTree`] when a node record lacks one of
    /// its three fields and [`ShapeError::KindMismatch`] when a tree position
    /// holds neither `null` nor a record.
    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Null => Ok(Self::empty()),
            Shape::Record(record) => {
                let value = required_field(record, "val")?.clone();
                let left = Self::try_from(required_field(record, "left")?)?;
                let right = Self::try_from(required_field(record, "right")?)?;
                Ok(Self::node(value, left, right))
            }
            other => Err(ShapeError::KindMismatch {
                expected: ShapeKind::Record,
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_child_field_is_reported() {
        let shape = Shape::Record(Record::from_fields([
            Field::new("val", 1),
            Field::new("left", Shape::Null),
        ]));
        assert_eq!(
            Tree::try_from(&shape),
            Err(ShapeError::MalformedTree { missing: "right" })
        );
    }

    #[rstest]
    #[case(Shape::number(1))]
    #[case(Shape::Undefined)]
    #[case(Shape::Sequence(crate::shape::Sequence::new()))]
    fn non_record_positions_are_rejected(#[case] shape: Shape) {
        assert!(matches!(
            Tree::try_from(&shape),
            Err(ShapeError::KindMismatch {
                expected: ShapeKind::Record,
                ..
            })
        ));
    }

    #[rstest]
    fn null_decodes_to_empty_tree() {
        assert_eq!(Tree::try_from(&Shape::Null), Ok(Tree::empty()));
        assert_eq!(Tree::empty().to_shape(), Shape::Null);
    }

    #[rstest]
    fn subtrees_are_shared() {
        let shared = Tree::leaf(1);
        let tree = Tree::node(0, shared.clone(), shared.clone());
        let left = tree.root().map(TreeNode::left);
        assert_eq!(left, Some(&shared));
        assert_eq!(tree.len(), 3);
    }
}

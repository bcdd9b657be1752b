//! In-order traversal.

use super::Tree;
use crate::control::Recursion;
use crate::shape::{Sequence, Shape};

/// Flattens a tree into the sequence of its values in in-order.
///
/// The left subtree comes first, then the node value, then the right
/// subtree. The empty tree yields the empty sequence. Evaluation runs on
/// [`Recursion`], so degenerate (list-like) trees of any depth are handled
/// without growing the call stack.
///
/// # Examples
///
/// ```rust
/// use shapewright::sequence;
/// use shapewright::tree::{self, Tree};
///
/// let tree = Tree::node(1, Tree::empty(), Tree::node(2, Tree::leaf(3), Tree::empty()));
/// assert_eq!(tree::inorder_traversal(&tree), sequence![1, 3, 2]);
/// assert_eq!(tree::inorder_traversal(&Tree::leaf("root")), sequence!["root"]);
/// assert_eq!(tree::inorder_traversal(&Tree::empty()), sequence![]);
/// ```
#[must_use]
pub fn inorder_traversal(tree: &Tree) -> Sequence {
    Sequence::from(traverse(tree.clone(), Vec::new()).run())
}

fn traverse(tree: Tree, accumulator: Vec<Shape>) -> Recursion<Vec<Shape>> {
    let Some(node) = tree.root else {
        return Recursion::done(accumulator);
    };
    let left = node.left.clone();
    Recursion::suspend(move || traverse(left, accumulator)).and_then(move |mut accumulator| {
        accumulator.push(node.value.clone());
        traverse(node.right.clone(), accumulator)
    })
}

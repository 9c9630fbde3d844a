//! Utilities to traverse the KdTree structure.

use std::fmt;

use crate::kdtree::index::KdNode;
use crate::point::Point;
use crate::r#type::Coord;

/// A read-only handle onto one node of a [`KdTree`][crate::kdtree::KdTree].
///
/// Handles know their depth, so the splitting axis of every node can be recovered while walking
/// the tree by hand.
#[derive(Clone, Copy)]
pub struct Node<'a, N: Coord> {
    node: &'a KdNode<N>,
    level: usize,
    dim: usize,
}

impl<'a, N: Coord> Node<'a, N> {
    pub(crate) fn new(node: &'a KdNode<N>, level: usize, dim: usize) -> Self {
        Self { node, level, dim }
    }

    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> &'a Point<N> {
        &self.node.point
    }

    /// The depth of this node; the root is at level 0.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// The axis this node splits its children on: `level % dim`.
    #[inline]
    pub fn axis(&self) -> usize {
        self.level % self.dim
    }

    /// The value of this node's point on its splitting axis.
    #[inline]
    pub fn split_value(&self) -> N {
        self.node.point[self.axis()]
    }

    /// The child holding points strictly less than [`split_value`][Self::split_value].
    pub fn left_child(&self) -> Option<Node<'a, N>> {
        self.node
            .left
            .as_deref()
            .map(|child| Node::new(child, self.level + 1, self.dim))
    }

    /// The child holding points greater than or equal to [`split_value`][Self::split_value].
    pub fn right_child(&self) -> Option<Node<'a, N>> {
        self.node
            .right
            .as_deref()
            .map(|child| Node::new(child, self.level + 1, self.dim))
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// Returns `true` if this node has at least one child.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<N: Coord> fmt::Debug for Node<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("point", self.point())
            .field("level", &self.level)
            .field("axis", &self.axis())
            .finish()
    }
}

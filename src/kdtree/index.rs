use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{KdQueryError, Result};
use crate::point::Point;
use crate::r#type::Coord;

/// A single tree node. Each node exclusively owns its children.
pub(crate) struct KdNode<N: Coord> {
    pub(crate) point: Point<N>,
    pub(crate) left: Option<Box<KdNode<N>>>,
    pub(crate) right: Option<Box<KdNode<N>>>,
}

impl<N: Coord> KdNode<N> {
    fn leaf(point: Point<N>) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }
}

/// Compare two points on a single axis.
///
/// This is the cycling comparator of the tree: a node at depth `level` splits its subtrees with
/// `cmp_axis(.., level % dim)`.
#[inline]
pub fn cmp_axis<N: Coord>(a: &[N], b: &[N], axis: usize) -> Ordering {
    a[axis].cmp(&b[axis])
}

/// A k-d tree built by incremental insertion.
///
/// Every node at depth `level` holds strictly smaller values on axis `level % dim` in its left
/// subtree, and greater-or-equal values in its right subtree. Points equal on every coordinate
/// are stored once. The tree is never rebalanced, so its height depends on insertion order.
///
/// Searches are provided by the [`KdTreeIndex`][crate::kdtree::KdTreeIndex] trait.
pub struct KdTree<N: Coord = i32> {
    pub(crate) root: Option<Box<KdNode<N>>>,
    pub(crate) dim: usize,
    pub(crate) len: usize,
}

impl<N: Coord> KdTree<N> {
    /// Create an empty tree whose points all have `dim` coordinates.
    ///
    /// # Panics
    ///
    /// If `dim` is zero.
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "a k-d tree needs at least one dimension");
        Self {
            root: None,
            dim,
            len: 0,
        }
    }

    /// Create an empty tree, rejecting a zero dimensionality.
    pub fn try_new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(KdQueryError::ZeroDimension);
        }
        Ok(Self::new(dim))
    }

    /// Create a tree by inserting every point of `points` in order.
    pub fn from_points<I>(dim: usize, points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point<N>>,
    {
        let mut tree = Self::new(dim);
        tree.extend(points);
        tree
    }

    /// The number of coordinates of every point in this tree.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The number of distinct points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no point has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a point, returning `false` if an identical point was already stored.
    ///
    /// # Panics
    ///
    /// If the point does not have [`dim`][Self::dim] coordinates.
    pub fn insert(&mut self, point: impl Into<Point<N>>) -> bool {
        let point = point.into();
        assert_eq!(
            point.dim(),
            self.dim,
            "inserted point has {} coordinates but the tree has {} dimensions",
            point.dim(),
            self.dim
        );
        self.insert_unchecked(point)
    }

    /// Insert a point, returning an error instead of panicking on a dimension mismatch.
    pub fn try_insert(&mut self, point: impl Into<Point<N>>) -> Result<bool> {
        let point = point.into();
        self.check_dim(point.dim())?;
        Ok(self.insert_unchecked(point))
    }

    fn insert_unchecked(&mut self, point: Point<N>) -> bool {
        let dim = self.dim;
        let mut slot = &mut self.root;
        let mut level = 0;

        while let Some(node) = slot {
            match cmp_axis(node.point.coords(), point.coords(), level % dim) {
                Ordering::Greater => slot = &mut node.left,
                Ordering::Equal if node.point == point => {
                    trace!(%point, level, "ignoring duplicate point");
                    return false;
                }
                _ => slot = &mut node.right,
            }
            level += 1;
        }

        *slot = Some(Box::new(KdNode::leaf(point)));
        self.len += 1;
        true
    }

    /// `true` if a point equal to `point` on every coordinate is stored.
    pub fn contains(&self, point: &[N]) -> bool {
        if point.len() != self.dim {
            return false;
        }

        let mut cursor = self.root.as_deref();
        let mut level = 0;
        while let Some(node) = cursor {
            cursor = match cmp_axis(node.point.coords(), point, level % self.dim) {
                Ordering::Greater => node.left.as_deref(),
                Ordering::Equal if node.point.coords() == point => return true,
                _ => node.right.as_deref(),
            };
            level += 1;
        }
        false
    }

    /// The number of nodes on the longest root-to-leaf path. Zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&KdNode<N>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Iterate over the stored points in pre-order (node, left subtree, right subtree).
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Remove every point, keeping the dimensionality.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }

    pub(crate) fn check_dim(&self, actual: usize) -> Result<()> {
        if actual != self.dim {
            return Err(KdQueryError::DimensionMismatch {
                expected: self.dim,
                actual,
            });
        }
        Ok(())
    }
}

/// Free a subtree one node at a time.
///
/// Children are detached before their parent is dropped, so the drop glue of `Box<KdNode>`
/// never recurses and degenerate (list-shaped) trees cannot overflow the stack.
fn teardown<N: Coord>(root: Option<Box<KdNode<N>>>) {
    let mut stack: Vec<Box<KdNode<N>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<N: Coord> Drop for KdTree<N> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<N: Coord> fmt::Debug for KdTree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dim", &self.dim)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<N: Coord, P: Into<Point<N>>> Extend<P> for KdTree<N> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

/// Pre-order iterator over the points of a [`KdTree`].
pub struct Iter<'a, N: Coord> {
    stack: Vec<&'a KdNode<N>>,
    remaining: usize,
}

impl<'a, N: Coord> Iterator for Iter<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right is pushed first so the left subtree is yielded before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Coord> ExactSizeIterator for Iter<'_, N> {}

impl<'a, N: Coord> IntoIterator for &'a KdTree<N> {
    type Item = &'a Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

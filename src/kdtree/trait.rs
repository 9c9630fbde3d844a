use tinyvec::TinyVec;

use crate::distance::{euclidean, hyperplane};
use crate::kdtree::{KdTree, Node};
use crate::point::Point;
use crate::r#type::Coord;
use crate::result::{Neighbors, ResultSet};

/// A trait for searching a k-d tree or one of its subtrees.
///
/// Both searches walk the tree with an explicit stack rather than recursion, so trees made
/// degenerate by sorted insertion order are searched without risk of overflowing the call stack.
pub trait KdTreeIndex<N: Coord>: Sized {
    /// The number of coordinates of every point in this index.
    fn dim(&self) -> usize;

    /// The topmost node of this index, or `None` if it holds no points.
    fn root(&self) -> Option<Node<'_, N>>;

    /// Find every point at the minimum Euclidean distance from `query`.
    ///
    /// All points tied for the minimum are returned, in traversal order. Ties are detected with
    /// exact equality of the `f32` distances, so large distances that round to the same value are
    /// reported as tied.
    ///
    /// ```
    /// use kdquery::kdtree::{KdTree, KdTreeIndex};
    ///
    /// let mut tree: KdTree = KdTree::new(2);
    /// tree.insert([2, 0]);
    /// tree.insert([-2, 0]);
    /// tree.insert([5, 5]);
    ///
    /// let nearest = tree.nearest_neighbors(&[0, 0]).sorted();
    /// assert_eq!(nearest.distance, Some(2.0));
    /// assert_eq!(nearest.points.to_text(), "-2 0\n2 0\n");
    /// ```
    ///
    /// # Panics
    ///
    /// If `query` does not have [`dim`][Self::dim] coordinates.
    fn nearest_neighbors(&self, query: &[N]) -> Neighbors<N> {
        let mut points = ResultSet::new();
        let distance = self.nearest_neighbors_into(query, &mut points);
        Neighbors { points, distance }
    }

    /// Append every point at the minimum distance from `query` to `out`, returning that distance.
    ///
    /// Points already in `out` are left untouched.
    fn nearest_neighbors_into(&self, query: &[N], out: &mut ResultSet<N>) -> Option<f32> {
        assert_eq!(
            query.len(),
            self.dim(),
            "query has {} coordinates but the index has {} dimensions",
            query.len(),
            self.dim()
        );

        let start = out.len();
        let mut best: Option<f32> = None;

        // Use TinyVec to avoid heap allocations for shallow trees
        let mut stack: TinyVec<[Frame<'_, N>; 33]> = TinyVec::new();
        stack.extend(self.root().map(Frame::enter));

        while let Some(frame) = stack.pop() {
            let Some(node) = frame.node else {
                continue;
            };

            let axis = node.axis();
            let split = node.split_value();
            let (near, far) = if query[axis] < split {
                (node.left_child(), node.right_child())
            } else {
                (node.right_child(), node.left_child())
            };

            if frame.near_done {
                // The far side can only hold a closer point if the splitting plane is strictly
                // closer than the best match found so far.
                if let (Some(far), Some(best)) = (far, best) {
                    if hyperplane(query[axis], split) < best {
                        stack.push(Frame::enter(far));
                    }
                }
                continue;
            }

            let point = node.point();
            let dist = euclidean(query, point.coords());
            match best {
                Some(current) if dist == current => out.push(point.clone()),
                Some(current) if dist > current => {}
                _ => {
                    out.truncate(start);
                    out.push(point.clone());
                    best = Some(dist);
                }
            }

            // Revisit this node once everything under the near child has been searched.
            stack.push(Frame::resume(node));
            stack.extend(near.map(Frame::enter));
        }

        best
    }

    /// Find every point inside the axis-aligned box `[low, high]`, bounds inclusive.
    ///
    /// Results are in traversal order. A box with `low[i] > high[i]` on any axis is empty.
    ///
    /// ```
    /// use kdquery::kdtree::{KdTree, KdTreeIndex};
    ///
    /// let tree = KdTree::<i32>::from_points(2, [[2, 3], [5, 4], [9, 6], [4, 7], [8, 1], [7, 2]]);
    /// let found = tree.range(&[0, 0], &[6, 6]).sorted();
    /// assert_eq!(found.to_text(), "2 3\n5 4\n");
    /// ```
    ///
    /// # Panics
    ///
    /// If either corner does not have [`dim`][Self::dim] coordinates.
    fn range(&self, low: &[N], high: &[N]) -> ResultSet<N> {
        let mut out = ResultSet::new();
        self.range_into(low, high, &mut out);
        out
    }

    /// Search the index for points within a box given by two corner points.
    fn range_points(&self, low: &Point<N>, high: &Point<N>) -> ResultSet<N> {
        self.range(low.coords(), high.coords())
    }

    /// Append every point inside the box `[low, high]` to `out`.
    fn range_into(&self, low: &[N], high: &[N], out: &mut ResultSet<N>) {
        assert!(
            low.len() == self.dim() && high.len() == self.dim(),
            "range corners have {} and {} coordinates but the index has {} dimensions",
            low.len(),
            high.len(),
            self.dim()
        );

        // Use TinyVec to avoid heap allocations for shallow trees
        let mut stack: TinyVec<[Option<Node<'_, N>>; 33]> = TinyVec::new();
        stack.push(self.root());

        while let Some(entry) = stack.pop() {
            let Some(node) = entry else {
                continue;
            };

            let point = node.point();
            if in_box(low, high, point.coords()) {
                out.push(point.clone());
            }

            // Left holds values strictly below the split and right holds values at or above
            // it, so a side is skipped only when the query interval lies entirely on the other.
            let axis = node.axis();
            let split = node.split_value();
            if high[axis] >= split {
                stack.push(node.right_child());
            }
            if low[axis] < split {
                stack.push(node.left_child());
            }
        }
    }
}

impl<N: Coord> KdTreeIndex<N> for KdTree<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn root(&self) -> Option<Node<'_, N>> {
        self.root
            .as_deref()
            .map(|node| Node::new(node, 0, self.dim))
    }
}

/// A subtree handle searches only the points below it, splitting on the same axes as the tree.
impl<N: Coord> KdTreeIndex<N> for Node<'_, N> {
    fn dim(&self) -> usize {
        self.point().dim()
    }

    fn root(&self) -> Option<Node<'_, N>> {
        Some(*self)
    }
}

/// One pending step of the nearest-neighbor walk.
#[derive(Clone, Copy, Default)]
struct Frame<'a, N: Coord> {
    node: Option<Node<'a, N>>,

    /// `false` on first arrival at `node`; `true` once its near subtree has been searched and
    /// only the far side remains to be considered.
    near_done: bool,
}

impl<'a, N: Coord> Frame<'a, N> {
    fn enter(node: Node<'a, N>) -> Self {
        Self {
            node: Some(node),
            near_done: false,
        }
    }

    fn resume(node: Node<'a, N>) -> Self {
        Self {
            node: Some(node),
            near_done: true,
        }
    }
}

/// `true` if every coordinate of `point` lies within `[low[i], high[i]]`.
#[inline]
pub(crate) fn in_box<N: Coord>(low: &[N], high: &[N], point: &[N]) -> bool {
    point
        .iter()
        .zip(low.iter().zip(high))
        .all(|(c, (lo, hi))| lo <= c && c <= hi)
}

//! Containers for query results.

use std::fmt;
use std::ops::Index;

use crate::point::Point;
use crate::r#type::Coord;

/// An ordered, growable collection of points produced by a search.
///
/// Points are appended in traversal order; call [`ResultSet::sort`] for a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<N: Coord> {
    points: Vec<Point<N>>,
}

impl<N: Coord> Default for ResultSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Coord> ResultSet<N> {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self { points: vec![] }
    }

    /// The number of points in this set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn push(&mut self, point: Point<N>) {
        self.points.push(point);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
    }

    /// Sort lexicographically, dimension 0 most significant.
    pub fn sort(&mut self) {
        if self.points.len() > 1 {
            self.points.sort_unstable();
        }
    }

    /// Consume this set, returning it sorted.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// `true` if an equal point is present.
    pub fn contains(&self, point: &Point<N>) -> bool {
        self.points.contains(point)
    }

    /// Iterate over the points in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point<N>> {
        self.points.iter()
    }

    /// The points as a slice, in their current order.
    pub fn as_slice(&self) -> &[Point<N>] {
        &self.points
    }

    /// Consume this set, returning its points.
    pub fn into_vec(self) -> Vec<Point<N>> {
        self.points
    }

    /// Render one line per point with space-separated coordinates and no trailing space.
    ///
    /// An empty set renders as the empty string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<N: Coord> fmt::Display for ResultSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}

impl<N: Coord> Index<usize> for ResultSet<N> {
    type Output = Point<N>;

    fn index(&self, index: usize) -> &Point<N> {
        &self.points[index]
    }
}

impl<N: Coord> From<Vec<Point<N>>> for ResultSet<N> {
    fn from(points: Vec<Point<N>>) -> Self {
        Self { points }
    }
}

impl<N: Coord> FromIterator<Point<N>> for ResultSet<N> {
    fn from_iter<I: IntoIterator<Item = Point<N>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<N: Coord> IntoIterator for ResultSet<N> {
    type Item = Point<N>;
    type IntoIter = std::vec::IntoIter<Point<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, N: Coord> IntoIterator for &'a ResultSet<N> {
    type Item = &'a Point<N>;
    type IntoIter = std::slice::Iter<'a, Point<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The outcome of a nearest-neighbor search: every stored point tied for the minimum distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors<N: Coord> {
    /// The tied closest points, in traversal order.
    pub points: ResultSet<N>,
    /// The minimum distance, or `None` when the tree is empty.
    pub distance: Option<f32>,
}

impl<N: Coord> Neighbors<N> {
    /// Returns `true` if the search found nothing, which happens only on an empty tree.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sort the tied points for presentation.
    pub fn sorted(mut self) -> Self {
        self.points.sort();
        self
    }
}

#[cfg(test)]
mod test {
    use super::ResultSet;
    use crate::point::Point;

    #[test]
    fn renders_one_line_per_point() {
        let set: ResultSet<i32> = vec![Point::from([5, 4]), Point::from([2, 3])].into();
        assert_eq!(set.to_text(), "5 4\n2 3\n");
        assert_eq!(set.sorted().to_text(), "2 3\n5 4\n");
    }

    #[test]
    fn empty_renders_nothing() {
        let set = ResultSet::<i64>::new();
        assert!(set.is_empty());
        assert_eq!(set.to_text(), "");
    }
}

//! Fixed-length integer points.

use std::fmt;
use std::ops::Index;

use tinyvec::TinyVec;

use crate::r#type::Coord;

/// An immutable point with one integer coordinate per dimension.
///
/// Coordinates are stored inline for up to four dimensions and spill to the heap beyond that.
/// Points order lexicographically with dimension 0 most significant, which is the order used to
/// present query results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<N: Coord> {
    coords: TinyVec<[N; 4]>,
}

impl<N: Coord> Point<N> {
    /// Create a point by copying the given coordinates.
    pub fn new(coords: &[N]) -> Self {
        Self {
            coords: coords.iter().copied().collect(),
        }
    }

    /// The number of coordinates of this point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// The raw coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.coords
    }

    /// Iterate over the coordinates in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = N> + '_ {
        self.coords.iter().copied()
    }
}

impl<N: Coord> Index<usize> for Point<N> {
    type Output = N;

    #[inline]
    fn index(&self, axis: usize) -> &N {
        &self.coords[axis]
    }
}

impl<N: Coord> AsRef<[N]> for Point<N> {
    fn as_ref(&self) -> &[N] {
        &self.coords
    }
}

impl<N: Coord> From<&[N]> for Point<N> {
    fn from(coords: &[N]) -> Self {
        Self::new(coords)
    }
}

impl<N: Coord> From<Vec<N>> for Point<N> {
    fn from(coords: Vec<N>) -> Self {
        coords.into_iter().collect()
    }
}

impl<N: Coord, const D: usize> From<[N; D]> for Point<N> {
    fn from(coords: [N; D]) -> Self {
        Self::new(&coords)
    }
}

impl<N: Coord> FromIterator<N> for Point<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

/// Coordinates separated by single spaces, in dimension order, with no trailing space.
impl<N: Coord> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut coords = self.coords.iter();
        if let Some(first) = coords.next() {
            write!(f, "{}", first)?;
            for c in coords {
                write!(f, " {}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Point;

    #[test]
    fn spills_past_inline_capacity() {
        let p = Point::from(vec![1i32, 2, 3, 4, 5, 6]);
        assert_eq!(p.dim(), 6);
        assert_eq!(p[5], 6);
        assert_eq!(p.coords(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn orders_lexicographically() {
        let mut points: Vec<Point<i32>> = vec![
            [3, 1].into(),
            [1, 9].into(),
            [1, -2].into(),
            [2, 0].into(),
        ];
        points.sort();
        let expected: Vec<Point<i32>> =
            vec![[1, -2].into(), [1, 9].into(), [2, 0].into(), [3, 1].into()];
        assert_eq!(points, expected);
    }

    #[test]
    fn displays_space_separated() {
        assert_eq!(Point::from([-4i64, 0, 17]).to_string(), "-4 0 17");
        assert_eq!(Point::<i32>::from(vec![]).to_string(), "");
    }
}

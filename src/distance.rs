//! Distance computations shared by the nearest-neighbor search.
//!
//! Distances are single-precision `f32` values. Each squared difference is formed in `f64` and
//! added to an `f32` running sum, rounding after every term. Tie detection compares the results
//! with exact equality, so once squared distances pass 2^24 points whose true distances differ
//! slightly can round to the same value and are reported as tied.

use crate::r#type::Coord;

/// Euclidean distance between two coordinate slices of equal length.
#[inline]
pub fn euclidean<N: Coord>(a: &[N], b: &[N]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    sq_dist(a, b).sqrt()
}

/// Squared Euclidean distance between two coordinate slices of equal length.
#[inline]
pub(crate) fn sq_dist<N: Coord>(a: &[N], b: &[N]) -> f32 {
    a.iter().zip(b).fold(0f32, |sum, (&p, &q)| {
        let d = q.as_f64() - p.as_f64();
        (sum as f64 + d * d) as f32
    })
}

/// Distance from a query coordinate to the splitting hyperplane through `split` on one axis.
#[inline]
pub fn hyperplane<N: Coord>(query: N, split: N) -> f32 {
    (query.as_f64() - split.as_f64()).abs() as f32
}

//! An insertion-built K-D Tree over integer points.

#![warn(missing_docs)]

mod index;
mod r#trait;
mod traversal;

pub use index::{cmp_axis, Iter, KdTree};
pub use r#trait::KdTreeIndex;
pub use traversal::Node;

//! # kdquery
//!
//! A k-d tree over fixed-dimensionality integer points, built by incremental insertion, that
//! answers two queries:
//!
//! - **nearest neighbors**: every stored point tied for the minimum Euclidean distance to a query
//!   point, together with that distance;
//! - **range search**: every stored point inside an axis-aligned box, bounds inclusive.
//!
//! ```
//! use kdquery::kdtree::{KdTree, KdTreeIndex};
//!
//! let mut tree: KdTree = KdTree::new(2);
//! for point in [[2, 3], [5, 4], [9, 6], [4, 7], [8, 1], [7, 2]] {
//!     tree.insert(point);
//! }
//!
//! let nearest = tree.nearest_neighbors(&[9, 2]);
//! assert_eq!(nearest.points.to_text(), "8 1\n");
//! assert_eq!(nearest.distance, Some(2f32.sqrt()));
//!
//! let found = tree.range(&[0, 0], &[6, 6]).sorted();
//! assert_eq!(found.to_text(), "2 3\n5 4\n");
//! ```
//!
//! The [`session`] module implements the line-oriented `LOAD` / `NN` / `RS` / `EXIT` command
//! interpreter driven by the `kdquery` binary.

pub mod distance;
mod error;
pub mod input;
pub mod kdtree;
mod point;
mod result;
mod scan;
pub mod session;
mod r#type;

pub use error::{KdQueryError, Result};
pub use point::Point;
pub use r#type::Coord;
pub use result::{Neighbors, ResultSet};
pub use scan::Scanner;

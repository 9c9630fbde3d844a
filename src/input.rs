//! Reading point set descriptions into a tree.
//!
//! A point set is a point count, a dimensionality, then `count * dim` integers, all separated by
//! arbitrary whitespace:
//!
//! ```text
//! 6 2
//! 2 3
//! 5 4
//! 9 6
//! 4 7
//! 8 1
//! 7 2
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::kdtree::KdTree;
use crate::r#type::Coord;
use crate::scan::Scanner;

/// Build a tree from a point set read from `reader`.
///
/// Points are inserted in file order; repeated points are stored once.
pub fn read_point_set<N: Coord, R: BufRead>(reader: R) -> Result<KdTree<N>> {
    let mut scanner = Scanner::new(reader);
    let count: usize = scanner.next_int("point count")?;
    let dim: usize = scanner.next_int("dimensionality")?;

    let mut tree = KdTree::try_new(dim)?;
    for _ in 0..count {
        let point = scanner.next_point::<N>(dim, "point coordinate")?;
        tree.try_insert(point)?;
    }

    debug!(
        count,
        dim,
        stored = tree.len(),
        height = tree.height(),
        "read point set"
    );
    Ok(tree)
}

/// Build a tree from the point set file at `path`.
pub fn load_point_set<N: Coord>(path: impl AsRef<Path>) -> Result<KdTree<N>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading point set");
    let file = File::open(path)?;
    read_point_set(BufReader::new(file))
}

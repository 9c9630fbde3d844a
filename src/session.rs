//! A line-oriented command interpreter over one tree.
//!
//! Commands are whitespace-separated words:
//!
//! - `LOAD <path>` reads a point set file (see [`crate::input`]) and replaces the current tree;
//! - `NN c0 .. c{D-1}` prints every point tied for nearest to the query;
//! - `RS l0 h0 .. l{D-1} h{D-1}` prints every point inside the box, bounds given as one
//!   `low high` pair per dimension;
//! - `EXIT` stops processing, as does the end of input.
//!
//! Query results are printed sorted, one point per line; an empty result prints nothing.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{KdQueryError, Result};
use crate::input::load_point_set;
use crate::kdtree::{KdTree, KdTreeIndex};
use crate::point::Point;
use crate::r#type::Coord;
use crate::scan::Scanner;

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<N: Coord> {
    /// Replace the current tree with the point set stored at this path.
    Load(PathBuf),
    /// Nearest-neighbor query.
    Nearest(Point<N>),
    /// Range query over the box `[low, high]`.
    Range { low: Point<N>, high: Point<N> },
    /// Stop processing commands.
    Exit,
}

/// Whether the interpreter should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interpreter state: the currently loaded tree, if any.
#[derive(Debug)]
pub struct Session<N: Coord = i32> {
    tree: Option<KdTree<N>>,
}

impl<N: Coord> Default for Session<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Coord> Session<N> {
    /// Create a session with no tree loaded.
    pub fn new() -> Self {
        Self { tree: None }
    }

    /// Create a session that queries an already built tree.
    pub fn with_tree(tree: KdTree<N>) -> Self {
        Self { tree: Some(tree) }
    }

    /// The currently loaded tree.
    pub fn tree(&self) -> Option<&KdTree<N>> {
        self.tree.as_ref()
    }

    fn loaded(&self) -> Result<&KdTree<N>> {
        self.tree.as_ref().ok_or(KdQueryError::NoTreeLoaded)
    }

    /// Parse the next command, skipping unknown words. `None` at end of input.
    ///
    /// Query arity depends on the loaded tree, so `NN` and `RS` fail with
    /// [`KdQueryError::NoTreeLoaded`] before the first `LOAD`.
    pub fn read_command<R: BufRead>(
        &self,
        scanner: &mut Scanner<R>,
    ) -> Result<Option<Command<N>>> {
        while let Some(word) = scanner.next_token()? {
            let command = match word.as_str() {
                "LOAD" => Command::Load(scanner.expect_token("LOAD path")?.into()),
                "NN" => {
                    let dim = self.loaded()?.dim();
                    Command::Nearest(scanner.next_point(dim, "NN coordinate")?)
                }
                "RS" => {
                    let dim = self.loaded()?.dim();
                    let (low, high) = scanner.next_bounds(dim)?;
                    Command::Range { low, high }
                }
                "EXIT" => Command::Exit,
                other => {
                    warn!(command = other, "skipping unknown command");
                    continue;
                }
            };
            return Ok(Some(command));
        }
        Ok(None)
    }

    /// Run one command, writing any query results to `out`.
    pub fn execute<W: Write>(&mut self, command: Command<N>, out: &mut W) -> Result<Flow> {
        match command {
            Command::Load(path) => {
                let tree = load_point_set(&path)?;
                debug!(path = %path.display(), dim = tree.dim(), len = tree.len(), "loaded tree");
                // Replacing the old tree drops it here.
                self.tree = Some(tree);
            }
            Command::Nearest(query) => {
                let nearest = self.loaded()?.nearest_neighbors(query.coords()).sorted();
                debug!(%query, found = nearest.points.len(), distance = ?nearest.distance, "NN");
                write!(out, "{}", nearest.points)?;
            }
            Command::Range { low, high } => {
                let found = self.loaded()?.range_points(&low, &high).sorted();
                debug!(%low, %high, found = found.len(), "RS");
                write!(out, "{}", found)?;
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Read and execute commands from `input` until `EXIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut scanner = Scanner::new(input);
        while let Some(command) = self.read_command(&mut scanner)? {
            if self.execute(command, out)? == Flow::Exit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{Command, Session};
    use crate::error::KdQueryError;
    use crate::kdtree::KdTree;
    use crate::point::Point;
    use crate::scan::Scanner;

    fn run(session: &mut Session<i32>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_queries_on_loaded_file() {
        let mut session = Session::new();
        let out = run(
            &mut session,
            "LOAD fixtures/points_2d.txt\nNN 9 2\nRS 0 6 0 6\nRS 10 20 10 20\nEXIT\n",
        );
        assert_eq!(out, "8 1\n2 3\n5 4\n");
    }

    #[test]
    fn prints_ties_sorted() {
        let mut session = Session::new();
        let out = run(&mut session, "LOAD fixtures/points_3d.txt NN 1 0 0 EXIT");
        // (0,0,0), (1,1,1), (2,0,0) are all at distance 1 from (1,0,0); (1,1,1) is sqrt(2).
        assert_eq!(out, "0 0 0\n2 0 0\n");
    }

    #[test]
    fn stops_at_exit() {
        let tree = KdTree::from_points(1, [[1], [2]]);
        let mut session = Session::with_tree(tree);
        let out = run(&mut session, "NN 2\nEXIT\nNN 1\n");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn skips_unknown_words() {
        let tree = KdTree::from_points(2, [[0, 0]]);
        let mut session = Session::with_tree(tree);
        let out = run(&mut session, "HELLO NN 5 5");
        assert_eq!(out, "0 0\n");
    }

    #[test]
    fn prints_points_tied_after_rounding() {
        let tree = KdTree::from_points(2, [[20_000, 0], [10_000, 0], [10_000, 1]]);
        let mut session = Session::with_tree(tree);
        let out = run(&mut session, "NN 0 0");
        assert_eq!(out, "10000 0\n10000 1\n");
    }

    #[test]
    fn queries_need_a_tree() {
        let session: Session<i32> = Session::new();
        let mut scanner = Scanner::new(Cursor::new("NN 1 2"));
        let err = session.read_command(&mut scanner).unwrap_err();
        assert!(matches!(err, KdQueryError::NoTreeLoaded));
    }

    #[test]
    fn parses_range_bounds_per_dimension() {
        let session = Session::with_tree(KdTree::<i32>::new(2));
        let mut scanner = Scanner::new(Cursor::new("RS 1 2 3 4"));
        let command = session.read_command(&mut scanner).unwrap();
        assert_eq!(
            command,
            Some(Command::Range {
                low: Point::from([1, 3]),
                high: Point::from([2, 4]),
            })
        );
    }

    #[test]
    fn load_replaces_previous_tree() {
        let mut session = Session::with_tree(KdTree::from_points(1, [[42]]));
        let out = run(&mut session, "LOAD fixtures/points_2d.txt NN 0 0");
        assert_eq!(out, "2 3\n");
        assert_eq!(session.tree().map(|tree| tree.dim()), Some(2));
    }
}

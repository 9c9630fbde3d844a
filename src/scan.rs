use std::collections::VecDeque;
use std::io::BufRead;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{KdQueryError, Result};
use crate::point::Point;
use crate::r#type::Coord;

/// Reads whitespace-separated words from a buffered reader, one line at a time.
///
/// Line breaks carry no meaning: a value may continue on the next line, and several commands may
/// share one line.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// The next word, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    /// The next word, treating end of input as an error. `what` names the expected value.
    pub fn expect_token(&mut self, what: &str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| KdQueryError::UnexpectedEof(what.to_string()))
    }

    /// Parse the next word as an integer.
    pub fn next_int<T: FromStr<Err = ParseIntError>>(&mut self, what: &str) -> Result<T> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .map_err(|source| KdQueryError::InvalidInteger { token, source })
    }

    /// Read `dim` integers as one point.
    pub fn next_point<N: Coord>(&mut self, dim: usize, what: &str) -> Result<Point<N>> {
        (0..dim).map(|_| self.next_int::<N>(what)).collect()
    }

    /// Read `dim` `low high` pairs, one per dimension, as the two corners of a box.
    pub fn next_bounds<N: Coord>(&mut self, dim: usize) -> Result<(Point<N>, Point<N>)> {
        let mut low = Vec::with_capacity(dim);
        let mut high = Vec::with_capacity(dim);
        for _ in 0..dim {
            low.push(self.next_int::<N>("range lower bound")?);
            high.push(self.next_int::<N>("range upper bound")?);
        }
        Ok((low.into(), high.into()))
    }
}

use std::fmt::Debug;
use std::num::ParseIntError;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdQueryError {
    /// A point set or tree was declared with zero dimensions.
    #[error("Dimensionality must be at least 1.")]
    ZeroDimension,

    /// A point did not have the tree's number of coordinates.
    #[error("Expected a point with {expected} coordinates, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The input stream ended before a complete value could be read.
    #[error("Unexpected end of input while reading {0}.")]
    UnexpectedEof(String),

    /// A token that should have been an integer coordinate or count was not.
    #[error("Invalid integer {token:?}: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A query command arrived before any point set was loaded.
    #[error("No point set loaded; issue LOAD first.")]
    NoTreeLoaded,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KdQueryError>;

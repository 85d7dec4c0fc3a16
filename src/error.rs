use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading, grouping or reporting points.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained no points.
    #[error("empty input: no points to group")]
    EmptyInput,

    /// Requested group count is outside `1..=n_points`.
    #[error("invalid group count: requested {requested}, but the input has {n_points} points")]
    InvalidGroupCount {
        /// Requested number of groups.
        requested: usize,
        /// Number of points loaded.
        n_points: usize,
    },

    /// A point record could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// A point record has a different dimension than the first one.
    #[error("line {line}: dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        /// 1-based line number in the input.
        line: usize,
        /// Dimension of the first point.
        expected: usize,
        /// Dimension of this point.
        found: usize,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contraction loop left the forest in a state that valid input cannot produce.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

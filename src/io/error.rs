//! Error types for puzzle parsing and assembly preconditions

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::tile::TileId;

/// Main error type for all solver operations
///
/// Search exhaustion is deliberately absent from this taxonomy: a puzzle
/// with no valid assembly is an ordinary outcome reported by the
/// assembler, never an error.
#[derive(Debug)]
pub enum AssemblyError {
    /// Puzzle text contains a character that is not a pixel symbol
    InvalidSymbol {
        /// The offending character
        symbol: char,
    },

    /// A tile's four edges are empty or differ in length
    EdgeLengthMismatch {
        /// Lengths of the top, right, bottom, and left edges
        lengths: [usize; 4],
    },

    /// Two adjacent edges disagree on their shared corner pixel
    CornerMismatch {
        /// Name of the corner where the edges meet
        corner: &'static str,
    },

    /// Puzzle text does not follow the tile block format
    InvalidPuzzle {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Tile count cannot fill the requested square assembly
    GridMismatch {
        /// Number of tiles supplied
        tile_count: usize,
        /// Requested assembly side length
        width: usize,
    },

    /// Two tiles carry the same identifier
    DuplicateTileId {
        /// The repeated identifier
        id: TileId,
    },

    /// Target path is not a usable puzzle file or directory
    InvalidTarget {
        /// The rejected path
        path: PathBuf,
        /// Why the path was rejected
        reason: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol } => {
                write!(f, "Invalid pixel symbol '{symbol}' (expected '#' or '.')")
            }
            Self::EdgeLengthMismatch { lengths } => {
                let [top, right, bottom, left] = lengths;
                write!(
                    f,
                    "Tile edges must be non-empty and equal in length (got {top}, {right}, {bottom}, {left})"
                )
            }
            Self::CornerMismatch { corner } => {
                write!(f, "Adjacent edges disagree at the {corner} corner")
            }
            Self::InvalidPuzzle { reason } => {
                write!(f, "Invalid puzzle input: {reason}")
            }
            Self::GridMismatch { tile_count, width } => {
                write!(f, "{tile_count} tiles cannot fill a {width}x{width} assembly")
            }
            Self::DuplicateTileId { id } => {
                write!(f, "Tile id {id} appears more than once")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AssemblyError>;

impl From<std::io::Error> for AssemblyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid puzzle error
pub fn invalid_puzzle(reason: &impl ToString) -> AssemblyError {
    AssemblyError::InvalidPuzzle {
        reason: reason.to_string(),
    }
}

/// Create a file system error with path and operation context
pub fn file_error(path: &Path, operation: &'static str, source: std::io::Error) -> AssemblyError {
    AssemblyError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

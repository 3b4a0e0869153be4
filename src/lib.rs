//! Backtracking solver for jigsaw tile assembly with edge-pattern matching
//!
//! The system models square tiles by their four border patterns, expands each
//! tile into its rotations and flips, and reconstructs the square arrangement
//! in which every pair of abutting edges matches via exhaustive backtracking.

#![forbid(unsafe_code)]

/// Backtracking search over tile placements
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Edge, tile, and grid data structures
pub mod spatial;

pub use io::error::{AssemblyError, Result};

//! Spatial data structures for tiles and the assembly grid
//!
//! This module contains the solver's data model:
//! - Edge bit-sequences with mirror matching
//! - Square tiles and their symmetry operations
//! - Orientation closures under the dihedral group
//! - The assembly grid with placement and undo

/// Edge bit-sequences and mirror matching
pub mod edge;
/// Assembly grid with edge-matched placement and undo
pub mod grid;
/// Dihedral closure of a tile under rotation and flips
pub mod orientation;
/// Square tiles with corner-consistent edges
pub mod tile;

pub use grid::Grid;

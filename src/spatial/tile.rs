//! Square tiles with corner-consistent clockwise edges

use crate::io::error::{AssemblyError, Result};
use crate::spatial::edge::Edge;

/// Puzzle-assigned tile identifier, carried alongside tile values
pub type TileId = u64;

/// A square tile described by its four border patterns
///
/// Edges are read clockwise around the tile: top left-to-right, right
/// top-to-bottom, bottom right-to-left, left bottom-to-top. Under this
/// convention every rotation is a plain relabelling of the four edges and
/// the neighbour-matching rule needs exactly one reversal.
///
/// Adjacent edges share their corner pixel. The invariant is checked at
/// construction and preserved structurally by every symmetry operation,
/// which only relabel or reverse the existing edge values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    top: Edge,
    right: Edge,
    bottom: Edge,
    left: Edge,
}

impl Tile {
    /// Build a tile from four clockwise-read edges
    ///
    /// # Errors
    ///
    /// Returns an error if the edges are empty or differ in length, or if
    /// two adjacent edges disagree on their shared corner pixel
    pub fn new(top: Edge, right: Edge, bottom: Edge, left: Edge) -> Result<Self> {
        let lengths = [top.len(), right.len(), bottom.len(), left.len()];
        if top.is_empty() || lengths.iter().any(|&length| length != top.len()) {
            return Err(AssemblyError::EdgeLengthMismatch { lengths });
        }

        let corners = [
            ("top-right", top.last(), right.first()),
            ("right-bottom", right.last(), bottom.first()),
            ("bottom-left", bottom.last(), left.first()),
            ("left-top", left.last(), top.first()),
        ];
        for (corner, outgoing, incoming) in corners {
            if outgoing != incoming {
                return Err(AssemblyError::CornerMismatch { corner });
            }
        }

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    /// The tile turned 90° clockwise
    ///
    /// Clockwise-read edges rotate cyclically: the old left edge becomes
    /// the new top, and so on around the tile.
    #[must_use]
    pub fn rotate(&self) -> Self {
        Self {
            top: self.left.clone(),
            right: self.top.clone(),
            bottom: self.right.clone(),
            left: self.bottom.clone(),
        }
    }

    /// The tile mirrored top-to-bottom
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        Self {
            top: self.bottom.reverse(),
            right: self.right.reverse(),
            bottom: self.top.reverse(),
            left: self.left.reverse(),
        }
    }

    /// The tile mirrored left-to-right
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        Self {
            top: self.top.reverse(),
            right: self.left.reverse(),
            bottom: self.bottom.reverse(),
            left: self.right.reverse(),
        }
    }

    /// Top edge, read left to right
    pub const fn top(&self) -> &Edge {
        &self.top
    }

    /// Right edge, read top to bottom
    pub const fn right(&self) -> &Edge {
        &self.right
    }

    /// Bottom edge, read right to left
    pub const fn bottom(&self) -> &Edge {
        &self.bottom
    }

    /// Left edge, read bottom to top
    pub const fn left(&self) -> &Edge {
        &self.left
    }

    /// Side length shared by all four edges
    pub fn side_length(&self) -> usize {
        self.top.len()
    }
}

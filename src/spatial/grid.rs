//! Assembly grid with edge-matched placement and stack-discipline undo

use crate::spatial::tile::{Tile, TileId};

/// Row-major board of placed tiles under the edge-matching invariant
///
/// Placements form a stack: `attempt_add` may only extend the current
/// prefix and `pop` may only retract it, so every intermediate state is a
/// valid partial assembly. Position in the grid is implicit in placement
/// order; callers never supply row or column.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    placements: Vec<(TileId, Tile)>,
}

impl Grid {
    /// Create an empty grid for a `width × width` assembly
    pub fn new(width: usize) -> Self {
        Self {
            width,
            placements: Vec::with_capacity(width * width),
        }
    }

    /// Try to place a tile at the next row-major position
    ///
    /// The tile must mirror-match its left neighbour (unless it starts a
    /// row) and the tile above it (unless it sits in the first row). On any
    /// failed check the grid is left untouched and `false` is returned.
    pub fn attempt_add(&mut self, id: TileId, tile: Tile) -> bool {
        let count = self.placements.len();
        if count == self.capacity() {
            return false;
        }

        if count % self.width != 0 {
            let Some((_, neighbour)) = self.placements.last() else {
                return false;
            };
            if !tile.left().mirrors(neighbour.right()) {
                return false;
            }
        }

        if count >= self.width {
            let Some((_, neighbour)) = self.placements.get(count - self.width) else {
                return false;
            };
            if !tile.top().mirrors(neighbour.bottom()) {
                return false;
            }
        }

        self.placements.push((id, tile));
        true
    }

    /// Remove and return the most recent placement
    ///
    /// The sole undo primitive. Returns `None` on an empty grid; the
    /// assembler never pops more than it pushed.
    pub fn pop(&mut self) -> Option<(TileId, Tile)> {
        self.placements.pop()
    }

    /// Fixed side length of the assembly
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of tiles placed so far
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Test whether no tiles have been placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total number of positions in the finished assembly
    pub const fn capacity(&self) -> usize {
        self.width * self.width
    }

    /// Test whether every position is filled
    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.capacity()
    }

    /// All placements in row-major order
    pub fn placements(&self) -> &[(TileId, Tile)] {
        &self.placements
    }

    /// Placement at the given row and column, if that position is filled
    pub fn placement(&self, row: usize, column: usize) -> Option<&(TileId, Tile)> {
        if column < self.width {
            self.placements.get(row * self.width + column)
        } else {
            None
        }
    }
}

//! Backtracking search over tile orientations
//!
//! Drives the grid through trial placement and undo until every tile is
//! placed or the search space is exhausted. Edge mismatches prune branches
//! the moment they appear, so almost all of the nominal `8^n` leaf branches
//! are never visited on realistic input.

use log::{debug, trace};

use crate::algorithm::slots::SlotSet;
use crate::io::configuration::ATTEMPTS_PER_PROGRESS_TICK;
use crate::io::error::{AssemblyError, Result};
use crate::io::progress::SearchProgress;
use crate::spatial::Grid;
use crate::spatial::orientation::OrientationSet;
use crate::spatial::tile::TileId;

/// Verdict of one assembly search
///
/// Exhausting the search space is an ordinary outcome, reported as an
/// absent `grid`, never as an error.
#[derive(Debug)]
pub struct AssemblyOutcome {
    /// The first complete assembly found, if any
    pub grid: Option<Grid>,
    /// Number of trial placements attempted, successful or not
    pub attempts: u64,
}

/// Exhaustive backtracking search over tile orientation sets
///
/// Holds an arena of orientation sets sorted by tile id, a parallel id
/// table, a used-slot mask, and the single shared grid the search mutates.
/// The enumeration order (slots ascending by id, variants in generation
/// order) is fixed, so the first assembly found is reproducible.
pub struct Assembler {
    ids: Vec<TileId>,
    sets: Vec<OrientationSet>,
    used: SlotSet,
    grid: Grid,
    attempts: u64,
    progress: Option<SearchProgress>,
}

impl Assembler {
    /// Prepare a search over the given tiles for a `width × width` assembly
    ///
    /// Preconditions are rejected here, before any search work begins, and
    /// are never rechecked inside the recursion.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count does not equal `width²` or if two
    /// tiles share an id
    pub fn new(mut tiles: Vec<(TileId, OrientationSet)>, width: usize) -> Result<Self> {
        if tiles.len() != width * width {
            return Err(AssemblyError::GridMismatch {
                tile_count: tiles.len(),
                width,
            });
        }

        tiles.sort_by_key(|(id, _)| *id);
        for pair in tiles.windows(2) {
            if let [(first, _), (second, _)] = pair {
                if first == second {
                    return Err(AssemblyError::DuplicateTileId { id: *first });
                }
            }
        }

        let slot_count = tiles.len();
        let (ids, sets) = tiles.into_iter().unzip();

        Ok(Self {
            ids,
            sets,
            used: SlotSet::new(slot_count),
            grid: Grid::new(width),
            attempts: 0,
            progress: None,
        })
    }

    /// Report search progress on the given display while solving
    pub fn attach_progress(&mut self, progress: SearchProgress) {
        self.progress = Some(progress);
    }

    /// Run the search to completion
    ///
    /// Returns the first complete assembly found under the fixed
    /// enumeration order, or an empty outcome once every branch is
    /// exhausted.
    pub fn solve(mut self) -> AssemblyOutcome {
        let solved = self.search();
        debug!(
            "search finished: solved={solved} attempts={}",
            self.attempts
        );

        if let Some(progress) = self.progress.take() {
            progress.finish(solved, self.attempts);
        }

        AssemblyOutcome {
            grid: solved.then_some(self.grid),
            attempts: self.attempts,
        }
    }

    /// Number of trial placements attempted so far
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Recursive choice step over the next row-major position
    ///
    /// Tries every unused tile in every orientation; a successful placement
    /// recurses on the smaller remaining set and is undone (pop plus slot
    /// restore) if the recursion dead-ends. Returning `false` leaves the
    /// grid exactly as it was on entry.
    fn search(&mut self) -> bool {
        if self.used.is_full() {
            return true;
        }

        for slot in 0..self.sets.len() {
            if self.used.contains(slot) {
                continue;
            }
            let Some(id) = self.ids.get(slot).copied() else {
                continue;
            };

            let variant_count = self.sets.get(slot).map_or(0, OrientationSet::len);
            for index in 0..variant_count {
                let Some(variant) = self.sets.get(slot).and_then(|set| set.get(index)).cloned()
                else {
                    continue;
                };

                self.attempts += 1;
                self.record_progress();

                if !self.grid.attempt_add(id, variant) {
                    continue;
                }
                trace!(
                    "placed tile {id} variant {index} at position {}",
                    self.grid.len() - 1
                );

                self.used.insert(slot);
                if self.search() {
                    return true;
                }
                self.used.remove(slot);
                self.grid.pop();
                trace!("removed tile {id} variant {index} after dead end");
            }
        }

        false
    }

    fn record_progress(&self) {
        if self.attempts % ATTEMPTS_PER_PROGRESS_TICK != 0 {
            return;
        }
        if let Some(progress) = &self.progress {
            progress.record_attempts(self.attempts);
        }
    }
}

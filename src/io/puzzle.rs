//! Puzzle text parsing into identified tiles and orientation sets
//!
//! A puzzle is a sequence of tile blocks separated by blank lines. Each
//! block is a `Tile <id>:` header followed by exactly `N` rows of `N`
//! pixel symbols. The edge-extraction convention here is load-bearing:
//! the grid's mirror-match rule is only correct for clockwise-read edges.

use std::fs;
use std::path::Path;

use crate::io::configuration::{EMPTY_SYMBOL, FULL_SYMBOL, MAX_TILE_COUNT};
use crate::io::error::{AssemblyError, Result, file_error, invalid_puzzle};
use crate::spatial::edge::Edge;
use crate::spatial::orientation::OrientationSet;
use crate::spatial::tile::{Tile, TileId};

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// well-formed puzzle
pub fn load_puzzle(path: &Path) -> Result<Vec<(TileId, Tile)>> {
    let text = fs::read_to_string(path).map_err(|source| file_error(path, "read", source))?;
    parse_puzzle(&text)
}

/// Parse puzzle text into identified tiles
///
/// All tiles must share one side length; duplicate-id detection is left to
/// the assembler, which rejects it as a search precondition.
///
/// # Errors
///
/// Returns an error if the text contains no tile blocks, a malformed
/// block, mixed side lengths, or more than the supported number of tiles
pub fn parse_puzzle(text: &str) -> Result<Vec<(TileId, Tile)>> {
    let mut tiles = Vec::new();
    let mut side_length = None;

    for block in text.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let (id, tile) = parse_block(block)?;
        match side_length {
            None => side_length = Some(tile.side_length()),
            Some(expected) if expected != tile.side_length() => {
                return Err(invalid_puzzle(&format!(
                    "tile {id} has side length {}, expected {expected}",
                    tile.side_length()
                )));
            }
            Some(_) => {}
        }

        tiles.push((id, tile));
        if tiles.len() > MAX_TILE_COUNT {
            return Err(invalid_puzzle(&format!(
                "puzzle contains more than {MAX_TILE_COUNT} tiles"
            )));
        }
    }

    if tiles.is_empty() {
        return Err(invalid_puzzle(&"no tile blocks found"));
    }

    Ok(tiles)
}

/// Expand parsed tiles into their orientation closures
pub fn orientation_sets(tiles: Vec<(TileId, Tile)>) -> Vec<(TileId, OrientationSet)> {
    tiles
        .into_iter()
        .map(|(id, tile)| (id, OrientationSet::expand(&tile)))
        .collect()
}

/// Derive the assembly side length from a tile count
///
/// # Errors
///
/// Returns an error if the count is not a perfect square
pub fn grid_width(tile_count: usize) -> Result<usize> {
    let width = tile_count.isqrt();
    if width * width == tile_count {
        Ok(width)
    } else {
        Err(AssemblyError::GridMismatch { tile_count, width })
    }
}

fn parse_block(block: &str) -> Result<(TileId, Tile)> {
    let mut lines = block.lines();
    let header = lines
        .next()
        .ok_or_else(|| invalid_puzzle(&"empty tile block"))?;
    let id = parse_header(header)?;

    let rows: Vec<&str> = lines.map(str::trim_end).collect();
    let side = rows.len();
    if side == 0 {
        return Err(invalid_puzzle(&format!("tile {id} has no pixel rows")));
    }

    let mut pixels = Vec::with_capacity(side);
    for (row_index, row) in rows.iter().enumerate() {
        let row_pixels = parse_row(id, row_index, row)?;
        if row_pixels.len() != side {
            return Err(invalid_puzzle(&format!(
                "tile {id} row {row_index} has {} pixels, expected {side}",
                row_pixels.len()
            )));
        }
        pixels.push(row_pixels);
    }

    Ok((id, extract_tile(&pixels)?))
}

fn parse_header(header: &str) -> Result<TileId> {
    let name = header
        .trim()
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| invalid_puzzle(&format!("malformed tile header '{header}'")))?;
    name.trim()
        .parse::<TileId>()
        .map_err(|error| invalid_puzzle(&format!("non-numeric tile id '{name}': {error}")))
}

fn parse_row(id: TileId, row_index: usize, row: &str) -> Result<Vec<bool>> {
    let mut row_pixels = Vec::with_capacity(row.len());
    for symbol in row.chars() {
        match symbol {
            FULL_SYMBOL => row_pixels.push(true),
            EMPTY_SYMBOL => row_pixels.push(false),
            other => {
                return Err(invalid_puzzle(&format!(
                    "tile {id} row {row_index} contains invalid symbol '{other}'"
                )));
            }
        }
    }
    Ok(row_pixels)
}

/// Extract the four clockwise-read edges from a square pixel block
///
/// Top is row 0 left-to-right, right is the last column top-to-bottom,
/// bottom is the last row right-to-left, and left is the first column
/// bottom-to-top.
fn extract_tile(pixels: &[Vec<bool>]) -> Result<Tile> {
    let top: Vec<bool> = pixels.first().cloned().unwrap_or_default();
    let right: Vec<bool> = pixels
        .iter()
        .filter_map(|row| row.last().copied())
        .collect();
    let bottom: Vec<bool> = pixels
        .last()
        .map(|row| row.iter().rev().copied().collect())
        .unwrap_or_default();
    let left: Vec<bool> = pixels
        .iter()
        .rev()
        .filter_map(|row| row.first().copied())
        .collect();

    Tile::new(
        Edge::from_pixels(&top),
        Edge::from_pixels(&right),
        Edge::from_pixels(&bottom),
        Edge::from_pixels(&left),
    )
}

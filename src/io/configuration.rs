//! Solver constants and runtime configuration defaults

// Puzzle text format symbols
/// Symbol for a filled pixel
pub const FULL_SYMBOL: char = '#';
/// Symbol for an empty pixel
pub const EMPTY_SYMBOL: char = '.';

// Input/output settings
/// File extension recognised as puzzle input
pub const PUZZLE_EXTENSION: &str = "txt";
/// Suffix added to solution filenames
pub const OUTPUT_SUFFIX: &str = "_solution";

// Safety limit to keep malformed input from allocating unbounded arenas
/// Maximum number of tiles accepted in one puzzle
pub const MAX_TILE_COUNT: usize = 10_000;

// Progress display settings
/// Trial placements between progress refreshes
pub const ATTEMPTS_PER_PROGRESS_TICK: u64 = 4096;
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

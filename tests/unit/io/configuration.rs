//! Tests for solver configuration constants and validation

#[cfg(test)]
mod tests {
    use tilefit::io::configuration::{
        ATTEMPTS_PER_PROGRESS_TICK, EMPTY_SYMBOL, FULL_SYMBOL, MAX_INDIVIDUAL_PROGRESS_BARS,
        MAX_TILE_COUNT, OUTPUT_SUFFIX, PUZZLE_EXTENSION,
    };

    // Tests pixel symbols match the puzzle text format
    // Verified by swapping the full and empty symbols
    #[test]
    fn test_pixel_symbols() {
        assert_eq!(FULL_SYMBOL, '#');
        assert_eq!(EMPTY_SYMBOL, '.');
        assert_ne!(FULL_SYMBOL, EMPTY_SYMBOL);
    }

    // Tests maximum tile count value
    // Verified by reducing the tile limit
    #[test]
    fn test_max_tile_count() {
        assert_eq!(MAX_TILE_COUNT, 10_000);
    }

    // Tests output suffix is distinguishable from the input name
    // Verified by clearing the suffix
    #[test]
    fn test_output_settings() {
        assert_eq!(OUTPUT_SUFFIX, "_solution");
        assert_eq!(PUZZLE_EXTENSION, "txt");
        assert!(!OUTPUT_SUFFIX.is_empty());
    }

    // Tests progress cadence settings are positive
    // Verified by zeroing the tick interval
    #[test]
    fn test_progress_settings() {
        assert_eq!(ATTEMPTS_PER_PROGRESS_TICK, 4096);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert!(ATTEMPTS_PER_PROGRESS_TICK > 0);
    }
}

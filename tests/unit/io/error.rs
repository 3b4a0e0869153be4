//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilefit::AssemblyError;
    use tilefit::io::error::{file_error, invalid_puzzle};

    // Tests precondition errors format tile count and width
    // Verified by swapping tile count and width in the message
    #[test]
    fn test_grid_mismatch_display() {
        let err = AssemblyError::GridMismatch {
            tile_count: 5,
            width: 2,
        };
        assert_eq!(err.to_string(), "5 tiles cannot fill a 2x2 assembly");
    }

    // Tests duplicate id errors name the repeated identifier
    // Verified by formatting a fixed id instead
    #[test]
    fn test_duplicate_id_display() {
        let err = AssemblyError::DuplicateTileId { id: 2311 };
        assert_eq!(err.to_string(), "Tile id 2311 appears more than once");
    }

    // Tests corner mismatch errors name the offending corner
    // Verified by dropping the corner name from the message
    #[test]
    fn test_corner_mismatch_display() {
        let err = AssemblyError::CornerMismatch {
            corner: "top-right",
        };
        assert_eq!(
            err.to_string(),
            "Adjacent edges disagree at the top-right corner"
        );
    }

    // Tests edge length errors list all four lengths
    // Verified by reordering the lengths in the message
    #[test]
    fn test_edge_length_display() {
        let err = AssemblyError::EdgeLengthMismatch {
            lengths: [10, 10, 9, 10],
        };
        assert_eq!(
            err.to_string(),
            "Tile edges must be non-empty and equal in length (got 10, 10, 9, 10)"
        );
    }

    // Tests the invalid puzzle helper wraps the reason text
    // Verified by discarding the reason in the helper
    #[test]
    fn test_invalid_puzzle_helper() {
        let err = invalid_puzzle(&"no tile blocks found");
        assert_eq!(
            err.to_string(),
            "Invalid puzzle input: no tile blocks found"
        );
    }

    // Tests file errors chain their I/O source
    // Verified by dropping the source from the Error impl
    #[test]
    fn test_file_error_source_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = file_error(Path::new("puzzle.txt"), "read", source);

        assert!(err.source().is_some());
        assert!(err.to_string().contains("read"));
        assert!(err.to_string().contains("puzzle.txt"));
    }

    // Tests the From conversion produces a file system error
    // Verified by converting into the invalid puzzle variant
    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AssemblyError = io_err.into();
        match err {
            AssemblyError::FileSystem { path, .. } => {
                assert_eq!(path, PathBuf::from("<unknown>"));
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }

    // Tests the invalid target variant formats path and reason
    // Verified by dropping the path from the message
    #[test]
    fn test_invalid_target_display() {
        let err = AssemblyError::InvalidTarget {
            path: PathBuf::from("notes.md"),
            reason: "target file must be a .txt puzzle",
        };
        assert_eq!(
            err.to_string(),
            "Invalid target 'notes.md': target file must be a .txt puzzle"
        );
    }
}

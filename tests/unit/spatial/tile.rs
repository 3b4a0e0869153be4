//! Tests for `Tile` construction, corner consistency, and symmetry operations

#[cfg(test)]
mod tests {
    use tilefit::spatial::edge::Edge;
    use tilefit::spatial::tile::Tile;

    fn edge(symbols: &str) -> Edge {
        Edge::from_symbols(symbols).unwrap()
    }

    /// Corner-consistent tile with no internal symmetry
    fn sample_tile() -> Tile {
        Tile::new(edge("..##"), edge("#..."), edge(".#.."), edge("....")).unwrap()
    }

    // Verifies four clockwise rotations return the original tile value
    // Verified by rotating counter-clockwise in rotate
    #[test]
    fn test_rotate_has_order_four() {
        let tile = sample_tile();
        let rotated = tile.rotate().rotate().rotate().rotate();
        assert_eq!(rotated, tile);
        assert_ne!(tile.rotate(), tile);
    }

    // Verifies flipping vertically twice returns the original tile value
    // Verified by dropping the edge reversal from flip_vertical
    #[test]
    fn test_flip_vertical_is_involution() {
        let tile = sample_tile();
        assert_eq!(tile.flip_vertical().flip_vertical(), tile);
    }

    // Verifies flipping horizontally twice returns the original tile value
    // Verified by dropping the edge reversal from flip_horizontal
    #[test]
    fn test_flip_horizontal_is_involution() {
        let tile = sample_tile();
        assert_eq!(tile.flip_horizontal().flip_horizontal(), tile);
    }

    // Tests rotation relabels edges cyclically without altering content
    // Verified by reversing the relabelled edges
    #[test]
    fn test_rotate_relabels_edges() {
        let tile = sample_tile();
        let rotated = tile.rotate();

        assert_eq!(rotated.top(), tile.left());
        assert_eq!(rotated.right(), tile.top());
        assert_eq!(rotated.bottom(), tile.right());
        assert_eq!(rotated.left(), tile.bottom());
    }

    // Tests every symmetry operation preserves the corner invariant
    // Verified by relabelling edges without the matching reversals
    #[test]
    fn test_operations_preserve_corner_consistency() {
        let transforms = [
            sample_tile().rotate(),
            sample_tile().flip_vertical(),
            sample_tile().flip_horizontal(),
            sample_tile().flip_vertical().rotate(),
        ];

        for tile in transforms {
            assert_eq!(tile.top().last(), tile.right().first());
            assert_eq!(tile.right().last(), tile.bottom().first());
            assert_eq!(tile.bottom().last(), tile.left().first());
            assert_eq!(tile.left().last(), tile.top().first());
        }
    }

    // Tests construction rejects edges that disagree on a shared corner
    // Verified by removing the corner checks from Tile::new
    #[test]
    fn test_corner_mismatch_rejected() {
        // top ends '#' but right starts '.'
        let result = Tile::new(edge("..#"), edge("..."), edge("..."), edge("..."));
        assert!(result.is_err());
    }

    // Tests construction rejects edges of differing or zero length
    // Verified by removing the length checks from Tile::new
    #[test]
    fn test_edge_length_mismatch_rejected() {
        let result = Tile::new(edge("..."), edge("...."), edge("..."), edge("..."));
        assert!(result.is_err());

        let empty = Tile::new(edge(""), edge(""), edge(""), edge(""));
        assert!(empty.is_err());
    }

    // Tests tiles compare by edge values, not identity
    // Verified by comparing tiles through pointer identity
    #[test]
    fn test_value_equality() {
        assert_eq!(sample_tile(), sample_tile());
        assert_ne!(sample_tile(), sample_tile().rotate());
    }

    // Tests side length reports the shared edge length
    // Verified by returning the placement count instead
    #[test]
    fn test_side_length() {
        assert_eq!(sample_tile().side_length(), 4);
    }
}

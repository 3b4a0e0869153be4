//! Dihedral closure of a tile under rotation and flips

use std::collections::HashSet;

use crate::spatial::tile::Tile;

/// Every distinct orientation of one tile under rotation and flipping
///
/// Generated from three seeds (identity, vertical flip, horizontal flip),
/// each rotated three further times, with value duplicates removed. A tile
/// with no internal symmetry yields all eight variants; a fully symmetric
/// tile collapses to one. Variant order follows generation order, so
/// searches that consume the set are reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientationSet {
    variants: Vec<Tile>,
}

impl OrientationSet {
    /// Expand a tile into its deduplicated orientation closure
    ///
    /// The input tile is always the first variant.
    pub fn expand(tile: &Tile) -> Self {
        let seeds = [tile.clone(), tile.flip_vertical(), tile.flip_horizontal()];

        let mut seen = HashSet::new();
        let mut variants = Vec::new();
        for seed in seeds {
            let mut variant = seed;
            for _ in 0..4 {
                if seen.insert(variant.clone()) {
                    variants.push(variant.clone());
                }
                variant = variant.rotate();
            }
        }

        Self { variants }
    }

    /// Number of distinct orientations (between 1 and 8)
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Test whether the set has no variants (never true for expanded sets)
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variant at the given generation-order index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.variants.get(index)
    }

    /// All variants in generation order
    pub fn variants(&self) -> &[Tile] {
        &self.variants
    }

    /// Test whether a tile value is one of the variants
    pub fn contains(&self, tile: &Tile) -> bool {
        self.variants.contains(tile)
    }
}

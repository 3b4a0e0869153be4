//! Edge bit-sequences and mirror matching for tile borders

use bitvec::prelude::BitVec;
use std::fmt;

use crate::io::configuration::{EMPTY_SYMBOL, FULL_SYMBOL};
use crate::io::error::{AssemblyError, Result};

/// One border of a square tile as an ordered sequence of filled/empty pixels
///
/// Edges are immutable values; every transformation returns a new edge.
/// Filled pixels (`#`) are stored as set bits, empty pixels (`.`) as clear
/// bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    bits: BitVec,
}

impl Edge {
    /// Build an edge from filled/empty pixel values
    pub fn from_pixels(pixels: &[bool]) -> Self {
        let mut bits = BitVec::with_capacity(pixels.len());
        for &pixel in pixels {
            bits.push(pixel);
        }
        Self { bits }
    }

    /// Parse an edge from its `#`/`.` text form
    ///
    /// # Errors
    ///
    /// Returns an error if the text contains a character other than the two
    /// pixel symbols
    pub fn from_symbols(text: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(text.len());
        for symbol in text.chars() {
            match symbol {
                FULL_SYMBOL => bits.push(true),
                EMPTY_SYMBOL => bits.push(false),
                other => return Err(AssemblyError::InvalidSymbol { symbol: other }),
            }
        }
        Ok(Self { bits })
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.reverse();
        Self { bits }
    }

    /// Test whether this edge equals the reverse of another
    ///
    /// Two mirror-matched edges describe the same physical border as seen
    /// from the two tiles that share it.
    pub fn mirrors(&self, other: &Self) -> bool {
        self.bits.len() == other.bits.len()
            && self
                .bits
                .iter()
                .zip(other.bits.iter().rev())
                .all(|(a, b)| *a == *b)
    }

    /// First pixel of the edge
    pub fn first(&self) -> Option<bool> {
        self.bits.first().map(|bit| *bit)
    }

    /// Last pixel of the edge
    pub fn last(&self) -> Option<bool> {
        self.bits.last().map(|bit| *bit)
    }

    /// Number of pixels in the edge
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test whether the edge has no pixels
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Test whether the edge reads the same in both directions
    pub fn is_palindrome(&self) -> bool {
        self.mirrors(self)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            let symbol = if *bit { FULL_SYMBOL } else { EMPTY_SYMBOL };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

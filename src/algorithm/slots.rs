use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-capacity bitmask tracking which arena slots hold a placed tile
///
/// The assembler indexes orientation sets by dense slot; marking a slot
/// used removes its tile from the remaining work without copying any sets,
/// and clearing it restores the tile on backtrack.
#[derive(Clone, Debug)]
pub struct SlotSet {
    bits: BitVec,
}

impl SlotSet {
    /// Create a slot set with every slot unused
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Mark a slot as used
    pub fn insert(&mut self, slot: usize) {
        if slot < self.bits.len() {
            self.bits.set(slot, true);
        }
    }

    /// Mark a slot as unused again
    pub fn remove(&mut self, slot: usize) {
        if slot < self.bits.len() {
            self.bits.set(slot, false);
        }
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Count used slots
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test whether every slot is used
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }
}

impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotSet({}/{} used)", self.count(), self.capacity())
    }
}

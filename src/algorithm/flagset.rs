use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

use crate::graph::Flag;

/// Fixed-capacity bitset over flags
///
/// Flags are 1-based (0 is the unresolved sentinel), stored at `flag - 1`
/// internally. Provides O(1) membership testing and the set operations the
/// generator's expansion queries need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagSet {
    bits: BitVec,
    capacity: usize,
}

impl FlagSet {
    /// Create a set with no flags present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Build a set from an iterator of flags
    pub fn from_flags<I: IntoIterator<Item = Flag>>(flags: I, capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for flag in flags {
            set.insert(flag);
        }
        set
    }

    /// Insert a flag
    ///
    /// The sentinel 0 and flags past the capacity are ignored.
    pub fn insert(&mut self, flag: Flag) {
        let flag = flag as usize;
        if flag > 0 && flag <= self.capacity {
            self.bits.set(flag - 1, true);
        }
    }

    /// Test flag membership
    pub fn contains(&self, flag: Flag) -> bool {
        let flag = flag as usize;
        flag > 0 && self.bits.get(flag - 1).as_deref() == Some(&true)
    }

    /// Merge another set into this one
    pub fn union_with(&mut self, other: &Self) {
        if other.bits.len() > self.bits.len() {
            self.bits.resize(other.bits.len(), false);
            self.capacity = other.capacity;
        }
        for index in other.bits.iter_ones() {
            self.bits.set(index, true);
        }
    }

    /// Whether the two sets share any flag
    ///
    /// Block-level AND over the raw storage; no allocation.
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .any(|(a, b)| a & b != 0)
    }

    /// Test if no flags are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count flags in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate flags in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.bits.iter_ones().map(|index| (index + 1) as Flag)
    }

    /// Extract all flags as an ascending vector
    pub fn to_vec(&self) -> Vec<Flag> {
        self.iter().collect()
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({} flags: {:?})", self.len(), self.to_vec())
    }
}

//! Per-square magic parameters and the hash that indexes move tables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Bitboard;

/// Magic parameters for one (slider, square) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagicEntry {
    /// Relevant blocker squares (no edge terminals, no own square)
    pub mask: Bitboard,
    /// Multiplier of the perfect hash
    pub magic: u64,
    /// `64 - index_bits`, kept to avoid a subtraction per lookup
    pub shift: u8,
    /// Start of this square's segment in the combined table
    pub offset: u32,
}

impl MagicEntry {
    /// Entry for a standalone segment (offset 0) hashing to `index_bits` bits.
    #[inline]
    #[must_use]
    pub const fn new(mask: Bitboard, magic: u64, index_bits: u8) -> Self {
        debug_assert!(index_bits >= 1 && index_bits <= 63);
        MagicEntry {
            mask,
            magic,
            shift: 64 - index_bits,
            offset: 0,
        }
    }

    /// Same entry placed at `offset` in a combined table.
    #[inline]
    #[must_use]
    pub const fn with_offset(self, offset: u32) -> Self {
        MagicEntry { offset, ..self }
    }

    /// Width of the hash output.
    #[inline]
    #[must_use]
    pub const fn index_bits(&self) -> u8 {
        64 - self.shift
    }

    /// Slots in this square's segment.
    #[inline]
    #[must_use]
    pub const fn table_len(&self) -> usize {
        1usize << self.index_bits()
    }

    /// Slot within this square's own segment.
    ///
    /// The multiply is meant to overflow; only the top `index_bits` bits of
    /// the product are kept.
    #[inline]
    #[must_use]
    pub const fn local_index(&self, occupied: Bitboard) -> usize {
        let blockers = occupied.0 & self.mask.0;
        (blockers.wrapping_mul(self.magic) >> self.shift) as usize
    }

    /// Slot in the combined table.
    #[inline]
    #[must_use]
    pub const fn index(&self, occupied: Bitboard) -> usize {
        self.offset as usize + self.local_index(occupied)
    }
}

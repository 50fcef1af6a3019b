//! Randomised search for magic multipliers.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::builder::{fill_table, occupancy_moves};
use super::entry::MagicEntry;
use super::rays::relevant_blockers;
use crate::error::MagicError;
use crate::sync::StopFlag;
use crate::types::{Bitboard, Slider, Square};

/// Top byte of `mask * magic` must have at least this many bits set.
const MIN_HIGH_BITS: u32 = 6;
const HIGH_BYTE: u64 = 0xFF00_0000_0000_0000;

/// How many index bits to ask for on each square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexBits {
    /// One bit per relevant blocker square. Always has a solution.
    #[default]
    Relevant,
    /// The same width on every square. Narrower than the mask may have no
    /// solution for some squares, so pair it with an attempt bound.
    Fixed(u8),
}

impl IndexBits {
    /// Bits to use for a square whose mask is `mask`.
    #[inline]
    #[must_use]
    pub fn for_mask(self, mask: Bitboard) -> u8 {
        match self {
            IndexBits::Relevant => mask.popcount() as u8,
            IndexBits::Fixed(bits) => bits,
        }
    }
}

/// Bounds on a single square's search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits<'a> {
    /// Give up after this many candidates (`None` = keep going)
    pub max_attempts: Option<u64>,
    /// Checked between candidates
    pub stop: Option<&'a StopFlag>,
}

/// A magic that passed, with its standalone move table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMagic {
    pub entry: MagicEntry,
    /// Indexed by [`MagicEntry::local_index`]
    pub table: Vec<Bitboard>,
    /// Candidates drawn before this one was accepted, inclusive
    pub attempts: u64,
}

/// Reject table widths of zero or wider than the mask.
pub(crate) fn check_index_bits(
    slider: Slider,
    square: Square,
    mask: Bitboard,
    index_bits: u8,
) -> Result<(), MagicError> {
    let mask_bits = mask.popcount() as u8;
    if index_bits == 0 || index_bits > mask_bits {
        return Err(MagicError::InvalidIndexBits {
            slider,
            square,
            index_bits,
            mask_bits,
        });
    }
    Ok(())
}

/// Draw a candidate with few set bits: the AND of three random words.
#[inline]
pub fn random_sparse_magic<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Search for a magic for `slider` on `square` that hashes into
/// `2^index_bits` slots with no destructive collision.
///
/// `index_bits` must be in `1..=popcount(mask)`. The candidate stream is a
/// pure function of `rng`, so a seeded generator gives a repeatable result.
pub fn find_magic<R: Rng + ?Sized>(
    slider: Slider,
    square: Square,
    index_bits: u8,
    rng: &mut R,
    limits: &SearchLimits<'_>,
) -> Result<SquareMagic, MagicError> {
    let mask = relevant_blockers(slider, square);
    check_index_bits(slider, square, mask, index_bits)?;

    let pairs = occupancy_moves(slider, square, mask);
    let mut table = Vec::with_capacity(1 << index_bits);
    let mut attempts = 0u64;

    loop {
        if limits.stop.is_some_and(StopFlag::is_stopped) {
            return Err(MagicError::Cancelled {
                slider,
                square,
                attempts,
            });
        }
        if limits.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(MagicError::SearchExhausted {
                slider,
                square,
                index_bits,
                attempts,
            });
        }

        attempts += 1;
        let magic = random_sparse_magic(rng);
        if (mask.0.wrapping_mul(magic) & HIGH_BYTE).count_ones() < MIN_HIGH_BITS {
            continue;
        }

        let entry = MagicEntry::new(mask, magic, index_bits);
        if fill_table(&pairs, &entry, &mut table).is_ok() {
            log_debug!(
                "found {} magic for {} after {} attempts: {:#018x}",
                slider,
                square,
                attempts,
                magic
            );
            return Ok(SquareMagic {
                entry,
                table,
                attempts,
            });
        }
    }
}

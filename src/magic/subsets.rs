//! Carry-Rippler subset enumeration.

use crate::types::Bitboard;

/// Iterator over every subset of a mask, starting with the empty set.
///
/// Yields exactly `2^popcount(mask)` distinct bitboards. The step
/// `next = (subset - mask) & mask` relies on wrapping `u64` subtraction.
#[derive(Clone, Debug)]
pub struct Subsets {
    mask: u64,
    next: u64,
    done: bool,
}

impl Subsets {
    #[must_use]
    pub fn new(mask: Bitboard) -> Self {
        Subsets {
            mask: mask.0,
            next: 0,
            done: false,
        }
    }

    /// Number of subsets the iterator yields in total.
    #[must_use]
    pub fn total(&self) -> usize {
        1usize << self.mask.count_ones()
    }
}

impl Iterator for Subsets {
    type Item = Bitboard;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.next;
        self.next = current.wrapping_sub(self.mask) & self.mask;
        if self.next == 0 {
            self.done = true;
        }
        Some(Bitboard(current))
    }
}

impl std::iter::FusedIterator for Subsets {}

/// Shorthand for [`Subsets::new`].
#[inline]
#[must_use]
pub fn subsets(mask: Bitboard) -> Subsets {
    Subsets::new(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_mask_yields_only_empty_set() {
        let all: Vec<_> = subsets(Bitboard::EMPTY).collect();
        assert_eq!(all, vec![Bitboard::EMPTY]);
    }

    #[test]
    fn test_small_mask_order() {
        let all: Vec<u64> = subsets(Bitboard(0b1010)).map(|b| b.0).collect();
        assert_eq!(all, vec![0b0000, 0b0010, 0b1000, 0b1010]);
    }

    #[test]
    fn test_full_board_mask_starts_correctly() {
        let mut iter = subsets(Bitboard::ALL);
        assert_eq!(iter.next(), Some(Bitboard(0)));
        assert_eq!(iter.next(), Some(Bitboard(1)));
        assert_eq!(iter.next(), Some(Bitboard(2)));
    }

    #[test]
    fn test_rook_sized_mask_is_complete() {
        let mask = Bitboard(0x0001_0101_0101_017e);
        let seen: HashSet<u64> = subsets(mask).map(|b| b.0).collect();
        assert_eq!(seen.len(), 1 << mask.popcount());
        assert!(seen.contains(&0));
        assert!(seen.contains(&mask.0));
        assert!(seen.iter().all(|&s| s & mask.0 == s));
    }

    #[test]
    fn test_restartable() {
        let iter = subsets(Bitboard(0xf0));
        assert_eq!(iter.total(), 16);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut iter = subsets(Bitboard(1));
        assert_eq!(iter.next(), Some(Bitboard(0)));
        assert_eq!(iter.next(), Some(Bitboard(1)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}

//! Building a move table for one square from a candidate magic.

use super::entry::MagicEntry;
use super::rays;
use super::subsets::subsets;
use crate::error::CollisionError;
use crate::types::{Bitboard, Slider, Square};

/// Every blocker subset of `mask` paired with the true moves it produces.
pub(crate) fn occupancy_moves(
    slider: Slider,
    square: Square,
    mask: Bitboard,
) -> Vec<(Bitboard, Bitboard)> {
    subsets(mask)
        .map(|blockers| (blockers, rays::moves(slider, square, blockers)))
        .collect()
}

/// Hash every pair into `table`, which is resized and cleared first.
///
/// `Bitboard::EMPTY` marks a free slot: a slider always reaches at least one
/// neighbouring square, so no real move set is empty. A slot hit twice must
/// hold the same moves both times. On error `table` holds a partial fill and
/// must not be used.
pub(crate) fn fill_table(
    pairs: &[(Bitboard, Bitboard)],
    entry: &MagicEntry,
    table: &mut Vec<Bitboard>,
) -> Result<(), CollisionError> {
    table.clear();
    table.resize(entry.table_len(), Bitboard::EMPTY);

    for &(blockers, moves) in pairs {
        let index = entry.local_index(blockers);
        let slot = &mut table[index];
        if slot.is_empty() {
            *slot = moves;
        } else if *slot != moves {
            return Err(CollisionError {
                index,
                existing: *slot,
                incoming: moves,
            });
        }
    }
    Ok(())
}

/// Build the move table of `slider` on `square` for `entry`.
///
/// Returns the `2^index_bits` slot table indexed by
/// [`MagicEntry::local_index`], or the first destructive collision found.
pub fn try_build_table(
    slider: Slider,
    square: Square,
    entry: &MagicEntry,
) -> Result<Vec<Bitboard>, CollisionError> {
    let pairs = occupancy_moves(slider, square, entry.mask);
    let mut table = Vec::new();
    fill_table(&pairs, entry, &mut table)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magic::rays::relevant_blockers;
    use crate::magic::search::{find_magic, SearchLimits};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_identity_magic_collides() {
        // Rook on a8: mask covers b8..g8 and a2..a7. With magic = 1 the
        // shift keeps only the top bits, so the a-file blockers all land in
        // the same slots.
        let square = sq("a8");
        let mask = relevant_blockers(Slider::Rook, square);
        let bits = mask.popcount() as u8;
        let entry = MagicEntry::new(mask, 1, bits);
        assert!(try_build_table(Slider::Rook, square, &entry).is_err());
    }

    #[test]
    fn test_zero_magic_collides() {
        let square = sq("d4");
        let mask = relevant_blockers(Slider::Bishop, square);
        let entry = MagicEntry::new(mask, 0, mask.popcount() as u8);
        let err = try_build_table(Slider::Bishop, square, &entry).unwrap_err();
        assert_eq!(err.index, 0);
        assert_ne!(err.existing, err.incoming);
    }

    #[test]
    fn test_found_magic_rebuilds_same_table() {
        let square = sq("a1");
        let mask = relevant_blockers(Slider::Bishop, square);
        let mut rng = StdRng::seed_from_u64(7);
        let found = find_magic(
            Slider::Bishop,
            square,
            mask.popcount() as u8,
            &mut rng,
            &SearchLimits::default(),
        )
        .unwrap();
        let table = try_build_table(Slider::Bishop, square, &found.entry).unwrap();
        assert_eq!(table, found.table);
        assert_eq!(table.len(), 1 << mask.popcount());
    }

    #[test]
    fn test_constructive_collisions_allowed() {
        // For a rook on a1 any blocker on a2 hides a3..a7, so those subsets
        // share moves. A table with fewer slots than subsets is still valid
        // when every collision is between equal move sets.
        let square = sq("a1");
        let pairs = occupancy_moves(Slider::Rook, square, relevant_blockers(Slider::Rook, square));
        let distinct: std::collections::HashSet<_> = pairs.iter().map(|p| p.1).collect();
        assert!(distinct.len() < pairs.len());
        assert_eq!(distinct.len(), 7 * 7);
    }

    #[test]
    fn test_fill_table_reuses_buffer() {
        let square = sq("c1");
        let mask = relevant_blockers(Slider::Bishop, square);
        let pairs = occupancy_moves(Slider::Bishop, square, mask);
        let mut table = vec![Bitboard::ALL; 3];
        let bad = MagicEntry::new(mask, 0, 2);
        assert!(fill_table(&pairs, &bad, &mut table).is_err());
        assert_eq!(table.len(), 4);
    }
}

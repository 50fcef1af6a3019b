//! Ray walking: the slow ground truth used while building tables.

use crate::types::{Bitboard, Slider, Square};

/// Moves for `slider` on `square`, walking each ray one step at a time.
///
/// Every square reached is included; a ray stops after the first square that
/// is set in `blockers`, or at the board edge. Never used on the query path.
#[must_use]
pub fn moves(slider: Slider, square: Square, blockers: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut current = square;
        while let Some(next) = current.offset(dr, df) {
            moves = moves.with(next);
            if blockers.contains(next) {
                break;
            }
            current = next;
        }
    }
    moves
}

/// Squares whose occupancy can change the moves of `slider` on `square`.
///
/// Each ray is traced up to the square before the board edge: the last square
/// of a ray is reachable whatever sits on it. `square` itself is never set.
#[must_use]
pub fn relevant_blockers(slider: Slider, square: Square) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut current = square;
        while let Some(next) = current.offset(dr, df) {
            if next.offset(dr, df).is_none() {
                break;
            }
            mask = mask.with(next);
            current = next;
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn squares(names: &[&str]) -> Bitboard {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn test_rook_a1_mask() {
        let mask = relevant_blockers(Slider::Rook, sq("a1"));
        let expected = squares(&[
            "a2", "a3", "a4", "a5", "a6", "a7", "b1", "c1", "d1", "e1", "f1", "g1",
        ]);
        assert_eq!(mask, expected);
        assert_eq!(mask.popcount(), 12);
    }

    #[test]
    fn test_rook_d4_mask_skips_edges() {
        let mask = relevant_blockers(Slider::Rook, sq("d4"));
        assert_eq!(mask.popcount(), 10);
        assert!(!mask.contains(sq("d1")));
        assert!(!mask.contains(sq("d8")));
        assert!(!mask.contains(sq("a4")));
        assert!(!mask.contains(sq("h4")));
        assert!(!mask.contains(sq("d4")));
    }

    #[test]
    fn test_bishop_mask_sizes() {
        assert_eq!(relevant_blockers(Slider::Bishop, sq("a1")).popcount(), 6);
        assert_eq!(relevant_blockers(Slider::Bishop, sq("b1")).popcount(), 5);
        assert_eq!(relevant_blockers(Slider::Bishop, sq("d4")).popcount(), 9);
        assert_eq!(relevant_blockers(Slider::Bishop, sq("c3")).popcount(), 7);
    }

    #[test]
    fn test_masks_never_touch_edges_or_own_square() {
        for slider in Slider::ALL {
            for square in Square::all() {
                let mask = relevant_blockers(slider, square);
                assert!(!mask.contains(square));
                // An edge square can only be relevant when it lies strictly
                // between the piece and the far edge along that edge itself.
                for blocker in mask & Bitboard::EDGES {
                    assert_eq!(slider, Slider::Rook);
                    assert!(blocker.rank() == square.rank() || blocker.file() == square.file());
                }
                assert!(mask.is_subset_of(moves(slider, square, Bitboard::EMPTY)));
            }
        }
    }

    #[test]
    fn test_rook_moves_empty_board() {
        for square in Square::all() {
            assert_eq!(moves(Slider::Rook, square, Bitboard::EMPTY).popcount(), 14);
        }
    }

    #[test]
    fn test_bishop_corner_moves() {
        let moves = moves(Slider::Bishop, sq("a1"), Bitboard::EMPTY);
        assert_eq!(moves, squares(&["b2", "c3", "d4", "e5", "f6", "g7", "h8"]));
    }

    #[test]
    fn test_blocker_is_included_and_stops_ray() {
        let moves = moves(Slider::Rook, sq("d4"), squares(&["d6", "b4"]));
        assert!(moves.contains(sq("d6")));
        assert!(!moves.contains(sq("d7")));
        assert!(moves.contains(sq("b4")));
        assert!(!moves.contains(sq("a4")));
        assert!(moves.contains(sq("h4")));
        assert!(moves.contains(sq("d1")));
    }

    #[test]
    fn test_own_square_ignored() {
        let d4 = sq("d4");
        assert_eq!(
            moves(Slider::Bishop, d4, Bitboard::from_square(d4)),
            moves(Slider::Bishop, d4, Bitboard::EMPTY)
        );
    }
}

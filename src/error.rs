//! Error types for square parsing and magic table construction.

use std::fmt;

use crate::types::{Bitboard, Slider, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Square index out of bounds (must be 0-63)
    OutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A candidate magic mapped two blocker sets with different move sets to the
/// same table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionError {
    /// Slot (local to the square's segment) where the collision happened
    pub index: usize,
    /// Move set already stored in the slot
    pub existing: Bitboard,
    /// Move set that did not fit
    pub incoming: Bitboard,
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destructive collision at slot {}: {:#018x} vs {:#018x}",
            self.index, self.existing.0, self.incoming.0
        )
    }
}

impl std::error::Error for CollisionError {}

/// Error type for magic search and table assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicError {
    /// No valid magic within the configured attempt bound
    SearchExhausted {
        slider: Slider,
        square: Square,
        index_bits: u8,
        attempts: u64,
    },
    /// The stop flag was raised between attempts
    Cancelled {
        slider: Slider,
        square: Square,
        attempts: u64,
    },
    /// Requested table size is zero or larger than the relevant mask needs
    InvalidIndexBits {
        slider: Slider,
        square: Square,
        index_bits: u8,
        mask_bits: u8,
    },
    /// A supplied magic number does not hash the square's blockers without
    /// destructive collisions
    InvalidMagic {
        slider: Slider,
        square: Square,
        magic: u64,
    },
}

impl MagicError {
    /// Whether running the same search again could succeed.
    ///
    /// Only cancellation is retryable; an exhausted search would repeat the
    /// same candidates and the other variants are configuration errors.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, MagicError::Cancelled { .. })
    }
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagicError::SearchExhausted {
                slider,
                square,
                index_bits,
                attempts,
            } => write!(
                f,
                "No {slider} magic for {square} with {index_bits} index bits after {attempts} attempts"
            ),
            MagicError::Cancelled {
                slider,
                square,
                attempts,
            } => write!(
                f,
                "{slider} magic search for {square} cancelled after {attempts} attempts"
            ),
            MagicError::InvalidIndexBits {
                slider,
                square,
                index_bits,
                mask_bits,
            } => write!(
                f,
                "Invalid index bits {index_bits} for {slider} on {square} (must be 1-{mask_bits})"
            ),
            MagicError::InvalidMagic {
                slider,
                square,
                magic,
            } => write!(f, "Magic {magic:#018x} is not valid for {slider} on {square}"),
        }
    }
}

impl std::error::Error for MagicError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d4() -> Square {
        "d4".parse().unwrap()
    }

    #[test]
    fn test_square_error_out_of_range() {
        let err = SquareError::OutOfRange { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("'z9'"));
    }

    #[test]
    fn test_collision_error_shows_both_sets() {
        let err = CollisionError {
            index: 7,
            existing: Bitboard(0xff),
            incoming: Bitboard(0x0f),
        };
        let text = err.to_string();
        assert!(text.contains("slot 7"));
        assert!(text.contains("0x00000000000000ff"));
        assert!(text.contains("0x000000000000000f"));
    }

    #[test]
    fn test_search_exhausted_message() {
        let err = MagicError::SearchExhausted {
            slider: Slider::Rook,
            square: d4(),
            index_bits: 8,
            attempts: 1000,
        };
        let text = err.to_string();
        assert!(text.contains("Rook"));
        assert!(text.contains("d4"));
        assert!(text.contains("1000"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_cancelled_is_retryable() {
        let err = MagicError::Cancelled {
            slider: Slider::Bishop,
            square: d4(),
            attempts: 3,
        };
        assert!(err.is_retryable());
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_invalid_index_bits_message() {
        let err = MagicError::InvalidIndexBits {
            slider: Slider::Bishop,
            square: d4(),
            index_bits: 12,
            mask_bits: 9,
        };
        assert!(err.to_string().contains("1-9"));
    }

    #[test]
    fn test_error_clone() {
        let err = MagicError::InvalidMagic {
            slider: Slider::Rook,
            square: d4(),
            magic: 0,
        };
        assert_eq!(err.clone(), err);
    }
}

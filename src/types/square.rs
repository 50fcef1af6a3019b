//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SquareError;

/// A square on the chess board, stored as its bit index.
///
/// a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, ..., h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const NUM: usize = 64;

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::NUM {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from rank and file (both 0-7)
    #[inline]
    #[must_use]
    pub const fn from_coords(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from rank and file given as signed offsets.
    /// Returns `None` once a ray steps off the board.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, dr: i8, df: i8) -> Option<Self> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 64 squares in index order
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..Self::NUM as u8).map(Square)
    }

    /// Build a square from an index that is already known to be in range.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::NUM);
        Square(index as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange {
            index: index as usize,
        })
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < Self::NUM {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfRange { index })
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            b @ b'A'..=b'H' => (b - b'A') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };

        Square::from_coords(rank, file).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!("a1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h1".parse::<Square>().unwrap().index(), 7);
        assert_eq!("a2".parse::<Square>().unwrap().index(), 8);
        assert_eq!("d4".parse::<Square>().unwrap().index(), 27);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn test_display_roundtrip() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn test_rejects_bad_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_range() {
        assert!(Square::try_from(63u8).is_ok());
        assert_eq!(
            Square::try_from(64u8),
            Err(SquareError::OutOfRange { index: 64 })
        );
        assert!(Square::try_from(200usize).is_err());
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let h4: Square = "h4".parse().unwrap();
        assert_eq!(h4.offset(0, 1), None);
        assert_eq!(h4.offset(1, -1), Some("g5".parse().unwrap()));
        let a1 = Square::new(0).unwrap();
        assert_eq!(a1.offset(-1, 0), None);
    }

    #[test]
    fn test_all_is_ordered() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }
}

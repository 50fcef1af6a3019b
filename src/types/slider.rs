//! Sliding piece types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece that moves along rays until blocked.
///
/// Queens are not a separate slider: their moves are the union of the rook
/// and bishop moves from the same square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    /// Both slider types in index order (Rook=0, Bishop=1)
    pub const ALL: [Slider; 2] = [Slider::Rook, Slider::Bishop];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Slider::Rook => 0,
            Slider::Bishop => 1,
        }
    }

    /// Ray directions as (rank delta, file delta)
    #[inline]
    #[must_use]
    pub const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slider::Rook => write!(f, "Rook"),
            Slider::Bishop => write!(f, "Bishop"),
        }
    }
}

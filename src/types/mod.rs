//! Core board types.
//!
//! - `Square` - board square as a bit index (a1 = 0, h8 = 63)
//! - `Bitboard` - 64-bit set of squares
//! - `Slider` - the sliding piece kinds that get magic tables

mod bitboard;
mod slider;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use slider::Slider;
pub use square::Square;

//! Rook, bishop and queen move lookup with magic bitboards.
//!
//! For a piece square and the set of occupied squares, the lookup returns
//! every square the piece can slide to, captures of the first blocker on each
//! ray included. Lookups cost a mask, a multiply, a shift and one load.
//!
//! # Example
//! ```
//! use slider_magics::{rook_moves, Bitboard, Square};
//!
//! let d4: Square = "d4".parse().unwrap();
//! let a4: Square = "a4".parse().unwrap();
//! let d1: Square = "d1".parse().unwrap();
//! let occupied = Bitboard::from_square(a4) | Bitboard::from_square(d1);
//! assert_eq!(rook_moves(d4, occupied).popcount(), 14);
//! ```

#[macro_use]
mod logging;

pub mod config;
mod error;
mod lookup;
pub mod magic;
mod sync;
mod types;

pub use config::SearchConfig;
pub use error::{CollisionError, MagicError, SquareError};
pub use lookup::{bishop_moves, init, init_with, queen_moves, rook_moves, tables};
pub use magic::{IndexBits, MagicEntry, MagicTables, SliderTable};
pub use sync::StopFlag;
pub use types::{Bitboard, BitboardIter, Slider, Square};

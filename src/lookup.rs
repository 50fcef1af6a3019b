//! Process-wide slider tables.
//!
//! The tables are built once, on first use or by an explicit [`init`] /
//! [`init_with`], and are read-only afterwards.

use once_cell::sync::OnceCell;

use crate::config::SearchConfig;
use crate::error::MagicError;
use crate::magic::MagicTables;
use crate::types::{Bitboard, Square};

static TABLES: OnceCell<MagicTables> = OnceCell::new();

/// The shared tables, assembling them from the stored magics on first call.
#[inline]
pub fn tables() -> &'static MagicTables {
    TABLES.get_or_init(MagicTables::precomputed)
}

/// Build the shared tables now so the first query does not pay for it.
pub fn init() -> &'static MagicTables {
    tables()
}

/// Build the shared tables by searching with `config` instead of using the
/// stored magics.
///
/// If the tables already exist they are returned unchanged and `config` is
/// not used. On failure nothing is published and a later call may retry.
pub fn init_with(config: &SearchConfig) -> Result<&'static MagicTables, MagicError> {
    TABLES.get_or_try_init(|| MagicTables::generate(config))
}

/// Rook moves from `square`, including captures of any blocker.
#[inline]
pub fn rook_moves(square: Square, occupied: Bitboard) -> Bitboard {
    tables().rook_moves(square, occupied)
}

/// Bishop moves from `square`, including captures of any blocker.
#[inline]
pub fn bishop_moves(square: Square, occupied: Bitboard) -> Bitboard {
    tables().bishop_moves(square, occupied)
}

/// Queen moves: rook and bishop moves combined.
#[inline]
pub fn queen_moves(square: Square, occupied: Bitboard) -> Bitboard {
    tables().queen_moves(square, occupied)
}

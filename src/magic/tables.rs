//! Combined move tables for both sliders.
//!
//! Each slider keeps one flat `Vec<Bitboard>` holding all 64 square segments
//! back to back; a square's [`MagicEntry::offset`] is the summed length of
//! the segments before it. Once built, nothing here is mutated, so a
//! `MagicTables` can be shared freely between threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::builder::try_build_table;
use super::entry::MagicEntry;
use super::precomputed;
use super::rays::relevant_blockers;
use super::search::{check_index_bits, find_magic, IndexBits, SearchLimits, SquareMagic};
use crate::config::SearchConfig;
use crate::error::MagicError;
use crate::sync::StopFlag;
use crate::types::{Bitboard, Slider, Square};

/// Magic entries and the combined move table for one slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderTable {
    slider: Slider,
    entries: [MagicEntry; Square::NUM],
    moves: Vec<Bitboard>,
}

impl SliderTable {
    /// Concatenate per-square segments given in square order.
    fn from_segments(slider: Slider, segments: impl IntoIterator<Item = SquareMagic>) -> Self {
        let mut entries = [MagicEntry::default(); Square::NUM];
        let mut moves = Vec::new();
        let mut count = 0;

        for (slot, segment) in entries.iter_mut().zip(segments) {
            debug_assert_eq!(segment.table.len(), segment.entry.table_len());
            *slot = segment.entry.with_offset(moves.len() as u32);
            moves.extend_from_slice(&segment.table);
            count += 1;
        }
        debug_assert_eq!(count, Square::NUM, "missing {slider} segments");

        SliderTable {
            slider,
            entries,
            moves,
        }
    }

    /// Build the table from known magics, verifying every square.
    ///
    /// Fails with [`MagicError::InvalidMagic`] on the first multiplier that
    /// produces a destructive collision. The same inputs always produce the
    /// same table.
    pub fn assemble(
        slider: Slider,
        magics: &[u64; Square::NUM],
        bits: IndexBits,
    ) -> Result<Self, MagicError> {
        Self::assemble_with(slider, magics, bits, |square, entry| {
            Err(MagicError::InvalidMagic {
                slider,
                square,
                magic: entry.magic,
            })
        })
    }

    /// Like [`SliderTable::assemble`], handing squares whose magic fails to
    /// `on_invalid` instead of giving up.
    fn assemble_with(
        slider: Slider,
        magics: &[u64; Square::NUM],
        bits: IndexBits,
        mut on_invalid: impl FnMut(Square, MagicEntry) -> Result<SquareMagic, MagicError>,
    ) -> Result<Self, MagicError> {
        let mut segments = Vec::with_capacity(Square::NUM);
        for square in Square::all() {
            let mask = relevant_blockers(slider, square);
            let index_bits = bits.for_mask(mask);
            check_index_bits(slider, square, mask, index_bits)?;

            let entry = MagicEntry::new(mask, magics[square.index()], index_bits);
            let segment = match try_build_table(slider, square, &entry) {
                Ok(table) => SquareMagic {
                    entry,
                    table,
                    attempts: 0,
                },
                Err(_) => on_invalid(square, entry)?,
            };
            segments.push(segment);
        }
        Ok(Self::from_segments(slider, segments))
    }

    /// Moves of this slider on `square` with `occupied` squares blocking.
    ///
    /// Bits outside the square's mask are ignored, including `square` itself.
    /// Captures of any blocker are included.
    #[inline]
    #[must_use]
    pub fn moves(&self, square: Square, occupied: Bitboard) -> Bitboard {
        let entry = &self.entries[square.index()];
        self.moves[entry.index(occupied)]
    }

    #[inline]
    #[must_use]
    pub fn slider(&self) -> Slider {
        self.slider
    }

    #[inline]
    #[must_use]
    pub fn entry(&self, square: Square) -> &MagicEntry {
        &self.entries[square.index()]
    }

    #[must_use]
    pub fn entries(&self) -> &[MagicEntry; Square::NUM] {
        &self.entries
    }

    /// The multipliers in square order, suitable for [`SliderTable::assemble`].
    #[must_use]
    pub fn magics(&self) -> [u64; Square::NUM] {
        std::array::from_fn(|i| self.entries[i].magic)
    }

    /// The flat move table.
    #[must_use]
    pub fn as_slice(&self) -> &[Bitboard] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Ready-to-query rook and bishop tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicTables {
    rook: SliderTable,
    bishop: SliderTable,
}

impl MagicTables {
    /// Assemble from the stored magics in [`precomputed`].
    ///
    /// A stored magic that fails verification is replaced by a fresh search
    /// seeded from [`SearchConfig::default`].
    pub fn try_precomputed() -> Result<Self, MagicError> {
        let config = SearchConfig::default();
        let limits = SearchLimits {
            max_attempts: config.max_attempts,
            stop: None,
        };
        let build = |slider: Slider| {
            SliderTable::assemble_with(
                slider,
                precomputed::magics(slider),
                IndexBits::Relevant,
                |square, entry| {
                    log_warn!("stored {slider} magic for {square} is invalid, searching again");
                    let mut rng = StdRng::seed_from_u64(config.job_seed(slider, square));
                    find_magic(slider, square, entry.index_bits(), &mut rng, &limits)
                },
            )
        };

        let tables = MagicTables {
            rook: build(Slider::Rook)?,
            bishop: build(Slider::Bishop)?,
        };
        log_info!(
            "slider tables ready: {} rook + {} bishop slots",
            tables.rook.len(),
            tables.bishop.len()
        );
        Ok(tables)
    }

    /// [`MagicTables::try_precomputed`] for infallible contexts.
    ///
    /// # Panics
    ///
    /// Only if a stored magic is invalid and the replacement search also
    /// fails, which means the default search configuration is broken.
    #[must_use]
    pub fn precomputed() -> Self {
        Self::try_precomputed()
            .unwrap_or_else(|err| panic!("failed to build slider tables: {err}"))
    }

    /// Search every (slider, square) pair from scratch.
    pub fn generate(config: &SearchConfig) -> Result<Self, MagicError> {
        Self::generate_with_stop(config, &StopFlag::new())
    }

    /// Search every (slider, square) pair from scratch on `config.threads`
    /// workers, giving up with [`MagicError::Cancelled`] once `stop` is set.
    ///
    /// Each job draws from its own generator seeded by
    /// [`SearchConfig::job_seed`], so the tables do not depend on the thread
    /// count. The first failing job stops the others and its error is returned.
    pub fn generate_with_stop(config: &SearchConfig, stop: &StopFlag) -> Result<Self, MagicError> {
        #[cfg(feature = "logging")]
        let start = std::time::Instant::now();

        let jobs: Vec<(Slider, Square)> = Slider::ALL
            .iter()
            .flat_map(|&slider| Square::all().map(move |square| (slider, square)))
            .collect();
        let results: Mutex<Vec<Option<SquareMagic>>> = Mutex::new(vec![None; jobs.len()]);
        let failure: Mutex<Option<MagicError>> = Mutex::new(None);
        // Raised by the first failing job; also follows the caller's flag
        let abort = stop.child();
        let cursor = AtomicUsize::new(0);
        let limits = SearchLimits {
            max_attempts: config.max_attempts,
            stop: Some(&abort),
        };

        thread::scope(|scope| {
            for _ in 0..config.worker_count().min(jobs.len()) {
                scope.spawn(|| loop {
                    let job = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(&(slider, square)) = jobs.get(job) else {
                        break;
                    };
                    // A skipped job must leave an error behind
                    if abort.is_stopped() {
                        failure.lock().get_or_insert(MagicError::Cancelled {
                            slider,
                            square,
                            attempts: 0,
                        });
                        break;
                    }
                    let mask = relevant_blockers(slider, square);
                    let bits = config.index_bits(slider).for_mask(mask);
                    let mut rng = StdRng::seed_from_u64(config.job_seed(slider, square));
                    match find_magic(slider, square, bits, &mut rng, &limits) {
                        Ok(found) => results.lock()[job] = Some(found),
                        Err(err) => {
                            failure.lock().get_or_insert(err);
                            abort.stop();
                        }
                    }
                });
            }
        });

        if let Some(err) = failure.into_inner() {
            return Err(err);
        }

        let mut found = results.into_inner().into_iter().flatten();
        let rook = SliderTable::from_segments(Slider::Rook, found.by_ref().take(Square::NUM));
        let bishop = SliderTable::from_segments(Slider::Bishop, found);

        log_info!(
            "generated slider tables in {:?}: {} rook + {} bishop slots",
            start.elapsed(),
            rook.len(),
            bishop.len()
        );
        Ok(MagicTables { rook, bishop })
    }

    /// Rebuild from per-slider magics, e.g. the output of an earlier
    /// [`MagicTables::generate`].
    pub fn from_magics(
        rook: (&[u64; Square::NUM], IndexBits),
        bishop: (&[u64; Square::NUM], IndexBits),
    ) -> Result<Self, MagicError> {
        Ok(MagicTables {
            rook: SliderTable::assemble(Slider::Rook, rook.0, rook.1)?,
            bishop: SliderTable::assemble(Slider::Bishop, bishop.0, bishop.1)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn rook_moves(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.rook.moves(square, occupied)
    }

    #[inline]
    #[must_use]
    pub fn bishop_moves(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.bishop.moves(square, occupied)
    }

    /// Union of the rook and bishop moves from `square`.
    #[inline]
    #[must_use]
    pub fn queen_moves(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.rook_moves(square, occupied) | self.bishop_moves(square, occupied)
    }

    #[inline]
    #[must_use]
    pub fn moves(&self, slider: Slider, square: Square, occupied: Bitboard) -> Bitboard {
        self.table(slider).moves(square, occupied)
    }

    #[inline]
    #[must_use]
    pub fn table(&self, slider: Slider) -> &SliderTable {
        match slider {
            Slider::Rook => &self.rook,
            Slider::Bishop => &self.bishop,
        }
    }

    #[inline]
    #[must_use]
    pub fn entry(&self, slider: Slider, square: Square) -> &MagicEntry {
        self.table(slider).entry(square)
    }

    /// Slots across both combined tables.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.rook.len() + self.bishop.len()
    }
}

//! Configuration for generating magic tables from scratch.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::magic::IndexBits;
use crate::types::{Slider, Square};

/// Default attempt bound per square.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000_000;

/// Default base seed for the per-square generators.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_51DE_AA6E;

/// Settings for [`MagicTables::generate`](crate::MagicTables::generate).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Base seed; each (slider, square) job derives its own generator from it
    pub seed: u64,
    /// Worker threads (at least one is always used)
    pub threads: usize,
    /// Candidates tried per square before giving up (`None` = unbounded)
    pub max_attempts: Option<u64>,
    /// Index-bit policy for rook squares
    pub rook_bits: IndexBits,
    /// Index-bit policy for bishop squares
    pub bishop_bits: IndexBits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            seed: DEFAULT_SEED,
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            rook_bits: IndexBits::Relevant,
            bishop_bits: IndexBits::Relevant,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_index_bits(mut self, slider: Slider, bits: IndexBits) -> Self {
        match slider {
            Slider::Rook => self.rook_bits = bits,
            Slider::Bishop => self.bishop_bits = bits,
        }
        self
    }

    /// Index-bit policy for `slider`.
    #[inline]
    #[must_use]
    pub fn index_bits(&self, slider: Slider) -> IndexBits {
        match slider {
            Slider::Rook => self.rook_bits,
            Slider::Bishop => self.bishop_bits,
        }
    }

    /// Seed of the generator used for one (slider, square) job.
    ///
    /// Depends only on the job, never on which worker runs it, so results do
    /// not change with the thread count.
    #[must_use]
    pub fn job_seed(&self, slider: Slider, square: Square) -> u64 {
        let job = (slider.index() * Square::NUM + square.index()) as u64;
        // splitmix64 finaliser
        let mut z = self.seed ^ job.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn worker_count(&self) -> usize {
        self.threads.max(1)
    }
}

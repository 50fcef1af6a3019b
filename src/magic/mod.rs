//! Magic bitboards for rooks and bishops.
//!
//! Table construction, leaves first:
//! - `rays` - slow ray walking, the ground truth, and relevant-blocker masks
//! - `subsets` - Carry-Rippler enumeration of every blocker subset of a mask
//! - `entry` - per-square hash parameters
//! - `builder` - fill one square's table from a candidate magic
//! - `search` - draw random candidates until one builds
//! - `tables` - concatenate the 64 squares per slider and answer queries

mod builder;
mod entry;
pub mod precomputed;
pub mod rays;
mod search;
mod subsets;
mod tables;

pub use builder::try_build_table;
pub use entry::MagicEntry;
pub use search::{find_magic, random_sparse_magic, IndexBits, SearchLimits, SquareMagic};
pub use subsets::{subsets, Subsets};
pub use tables::{MagicTables, SliderTable};

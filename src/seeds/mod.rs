//! Splitting Seeds core
//!
//! A dividing line rotates about a fixed center; scattered seeds are
//! classified into the two half-planes in real time and bounce when the
//! sweeping line passes through them. Pure geometry and state: the caller
//! pushes one angle per frame and renders whatever comes back.

pub mod field;
pub mod line;
pub mod round;

pub use field::{Seed, SeedField, SeedState, SplitCounts};
pub use line::{PartitionLine, Side};
pub use round::{SplitProgress, SplitRound, seed_count_options};

//! Penguin Pursuit maze core
//!
//! All maze logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Grids are rebuilt per round, never mutated after generation
//! - No rendering or platform dependencies

pub mod grid;
pub mod path;
pub mod round;

pub use grid::{Cell, Direction, Grid};
pub use path::{furthest_cell, shortest_path};
pub use round::{PursuitRound, PursuitToken, RoundOutcome, maze_size_for_level};

//! One round of Penguin Pursuit
//!
//! The round owns the maze, the player token, the rival token and the fish.
//! Movement comes in as plain requests (a direction for the player, an AI
//! tick for the rival); the round validates them against the grid and
//! reports the outcome. Rendering, tween timing and input mapping all live
//! with the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, Grid};
use super::path::{furthest_cell, shortest_path};
use crate::consts::GRID_MAX_SIZE;

/// Maze dimension for a difficulty level: 8×8 at level 1, one cell larger
/// every five levels, capped at 15×15.
pub fn maze_size_for_level(level: u32) -> usize {
    (8 + level as usize / 5).min(GRID_MAX_SIZE)
}

/// Terminal state of a round. First token to stand on the fish wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    InProgress,
    PlayerWon,
    RivalWon,
}

/// A moving token: current cell plus every previously occupied cell.
/// History length is the token's traveled distance, which the scoring
/// layer consumes at round end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PursuitToken {
    cell: Cell,
    history: Vec<Cell>,
}

impl PursuitToken {
    fn new(cell: Cell) -> Self {
        Self {
            cell,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Previously occupied cells, oldest first.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Cells traveled since the round started.
    #[inline]
    pub fn distance_traveled(&self) -> usize {
        self.history.len()
    }

    fn advance(&mut self, to: Cell) {
        self.history.push(self.cell);
        self.cell = to;
    }
}

/// A full pursuit round over a freshly generated maze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PursuitRound {
    grid: Grid,
    player: PursuitToken,
    rival: PursuitToken,
    fish: Cell,
    outcome: RoundOutcome,
}

impl PursuitRound {
    /// Build a round: generate the maze, start the player at the top-left
    /// corner and the rival at the bottom-right, and drop the fish on the
    /// cell furthest from the player.
    pub fn new(size: usize, rng: &mut impl Rng) -> Self {
        let grid = Grid::generate(size, rng);
        let size = grid.size();

        let player_start = Cell::new(0, 0);
        let rival_start = Cell::new(size - 1, size - 1);
        let fish = furthest_cell(&grid, player_start);

        let mut round = Self {
            grid,
            player: PursuitToken::new(player_start),
            rival: PursuitToken::new(rival_start),
            fish,
            outcome: RoundOutcome::InProgress,
        };
        // Degenerate grids (size 1) can start somebody on the fish
        round.check_arrivals();
        round
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> &PursuitToken {
        &self.player
    }

    #[inline]
    pub fn rival(&self) -> &PursuitToken {
        &self.rival
    }

    #[inline]
    pub fn fish(&self) -> Cell {
        self.fish
    }

    #[inline]
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome != RoundOutcome::InProgress
    }

    /// Apply a player movement request. Returns whether the token moved;
    /// requests into walls, off the grid or after round end are dropped.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        let Some(next) = self.grid.step(self.player.cell, dir) else {
            return false;
        };
        self.player.advance(next);
        self.check_arrivals();
        true
    }

    /// One AI tick: recompute the shortest path from the rival to the fish
    /// and take its first step. The recompute is redundant on a static
    /// maze but keeps the rival correct if the grid is ever swapped
    /// mid-round.
    pub fn advance_rival(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let path = shortest_path(&self.grid, self.rival.cell, self.fish);
        if path.len() < 2 {
            return false;
        }
        self.rival.advance(path[1]);
        self.check_arrivals();
        true
    }

    /// Player first: if both tokens stand on the fish the player keeps the
    /// win, matching the order the caller applies moves in.
    fn check_arrivals(&mut self) {
        if self.outcome != RoundOutcome::InProgress {
            return;
        }
        if self.player.cell == self.fish {
            self.outcome = RoundOutcome::PlayerWon;
            log::info!(
                "player reached the fish in {} moves",
                self.player.distance_traveled()
            );
        } else if self.rival.cell == self.fish {
            self.outcome = RoundOutcome::RivalWon;
            log::info!(
                "rival reached the fish in {} moves",
                self.rival.distance_traveled()
            );
        }
    }

    /// Manhattan distance from the player to the fish; the level curve
    /// uses it to judge a near miss after a rival win.
    pub fn player_fish_distance(&self) -> usize {
        self.player.cell.x.abs_diff(self.fish.x) + self.player.cell.y.abs_diff(self.fish.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_maze_size_for_level() {
        assert_eq!(maze_size_for_level(1), 8);
        assert_eq!(maze_size_for_level(4), 8);
        assert_eq!(maze_size_for_level(5), 9);
        assert_eq!(maze_size_for_level(10), 10);
        assert_eq!(maze_size_for_level(40), 15);
        assert_eq!(maze_size_for_level(100), 15);
    }

    #[test]
    fn test_round_setup() {
        let mut rng = Pcg32::seed_from_u64(21);
        let round = PursuitRound::new(8, &mut rng);
        assert_eq!(round.player().cell(), Cell::new(0, 0));
        assert_eq!(round.rival().cell(), Cell::new(7, 7));
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert!(round.grid().contains(round.fish()));
        // The fish never lands on the player's start in a non-trivial maze
        assert_ne!(round.fish(), Cell::new(0, 0));
    }

    #[test]
    fn test_invalid_player_moves_are_dropped() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut round = PursuitRound::new(8, &mut rng);
        // Off the grid: never valid from the corner
        assert!(!round.move_player(Direction::North));
        assert!(!round.move_player(Direction::West));
        assert_eq!(round.player().distance_traveled(), 0);
    }

    #[test]
    fn test_rival_hunts_down_the_fish() {
        let mut rng = Pcg32::seed_from_u64(77);
        let mut round = PursuitRound::new(8, &mut rng);
        let expected_steps = shortest_path(&round.grid, round.rival().cell(), round.fish()).len() - 1;

        let mut steps = 0;
        while !round.is_over() {
            assert!(round.advance_rival());
            steps += 1;
            assert!(steps <= 64 * 64, "rival failed to terminate");
        }
        assert_eq!(round.outcome(), RoundOutcome::RivalWon);
        assert_eq!(steps, expected_steps);
        assert_eq!(round.rival().distance_traveled(), expected_steps);
        assert_eq!(round.rival().cell(), round.fish());
    }

    #[test]
    fn test_no_moves_after_round_end() {
        let mut rng = Pcg32::seed_from_u64(77);
        let mut round = PursuitRound::new(8, &mut rng);
        while !round.is_over() {
            round.advance_rival();
        }
        let frozen = round.rival().distance_traveled();
        assert!(!round.advance_rival());
        assert!(!round.move_player(Direction::South));
        assert_eq!(round.rival().distance_traveled(), frozen);
    }

    #[test]
    fn test_player_wins_by_walking_the_path() {
        let mut rng = Pcg32::seed_from_u64(5150);
        let mut round = PursuitRound::new(8, &mut rng);
        let path = shortest_path(&round.grid, round.player().cell(), round.fish());
        for pair in path.windows(2) {
            let dir = Direction::between(pair[0], pair[1]).unwrap();
            assert!(round.move_player(dir));
        }
        assert_eq!(round.outcome(), RoundOutcome::PlayerWon);
        assert_eq!(round.player().cell(), round.fish());
        assert_eq!(round.player().distance_traveled(), path.len() - 1);
        // History starts at the spawn cell and tracks every hop
        assert_eq!(round.player().history()[0], Cell::new(0, 0));
    }

    #[test]
    fn test_player_fish_distance_is_manhattan() {
        let mut rng = Pcg32::seed_from_u64(21);
        let round = PursuitRound::new(8, &mut rng);
        let fish = round.fish();
        assert_eq!(round.player_fish_distance(), fish.x + fish.y);
    }

    #[test]
    fn test_single_cell_round_is_an_instant_player_win() {
        let mut rng = Pcg32::seed_from_u64(1);
        let round = PursuitRound::new(1, &mut rng);
        assert_eq!(round.outcome(), RoundOutcome::PlayerWon);
    }
}

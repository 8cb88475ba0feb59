//! Maze grid and randomized generation
//!
//! A maze is a `size × size` grid of cells, each holding four wall flags.
//! Generation carves passages with a randomized iterative depth-first
//! search, so the open walls always form a spanning tree of the cell
//! adjacency graph: every cell reachable, no cycles, exactly
//! `size² − 1` carved passages.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_MAX_SIZE, GRID_MIN_SIZE};

/// The four cardinal directions, in the fixed traversal order used by
/// every search in this crate: up, right, down, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Grid delta for one step. North is toward row 0.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction of a single-step move from `from` to `to`, if they are
    /// grid-adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let dx = to.x as i32 - from.x as i32;
        let dy = to.y as i32 - from.y as i32;
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == (dx, dy))
    }
}

/// One grid coordinate. `x` grows rightward, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Wall flags for one cell. A wall is shared: the flag on one side always
/// mirrors the flag on the neighbor's opposite side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Walls {
    north: bool,
    east: bool,
    south: bool,
    west: bool,
}

impl Walls {
    fn solid() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }

    fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    fn clear(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = false,
            Direction::East => self.east = false,
            Direction::South => self.south = false,
            Direction::West => self.west = false,
        }
    }
}

/// A generated maze. Immutable for the rest of the round once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Walls>,
}

impl Grid {
    /// Grid with every wall standing. Generation and hand-built test
    /// layouts both start from here.
    pub(crate) fn fully_walled(size: usize) -> Self {
        let size = size.clamp(GRID_MIN_SIZE, GRID_MAX_SIZE);
        Self {
            size,
            cells: vec![Walls::solid(); size * size],
        }
    }

    /// Generate a maze with randomized iterative DFS.
    ///
    /// Starts from a uniformly random cell, repeatedly carves into a random
    /// unvisited neighbor of the stack top, and backtracks when none remain.
    /// Every cell is visited exactly once, which is what makes the result a
    /// spanning tree. Sizes outside [1, 15] are clamped.
    pub fn generate(size: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self::fully_walled(size);
        let size = grid.size;

        let mut visited = vec![false; size * size];
        let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        visited[grid.index(start)] = true;

        let mut stack = vec![start];
        while let Some(&current) = stack.last() {
            let neighbors: Vec<(Direction, Cell)> = Direction::ALL
                .into_iter()
                .filter_map(|dir| grid.neighbor(current, dir).map(|cell| (dir, cell)))
                .filter(|&(_, cell)| !visited[grid.index(cell)])
                .collect();

            if neighbors.is_empty() {
                stack.pop();
            } else {
                let (dir, next) = neighbors[rng.random_range(0..neighbors.len())];
                grid.carve(current, dir);
                visited[grid.index(next)] = true;
                stack.push(next);
            }
        }

        grid
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.y * self.size + cell.x
    }

    /// Adjacent cell one step in `dir`, or None at the grid edge.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }
        let (dx, dy) = dir.delta();
        let x = cell.x.checked_add_signed(dx as isize)?;
        let y = cell.y.checked_add_signed(dy as isize)?;
        let next = Cell::new(x, y);
        self.contains(next).then_some(next)
    }

    /// Whether the wall on `cell`'s side facing `dir` is still standing.
    /// Out-of-bounds cells report all walls standing.
    pub fn has_wall(&self, cell: Cell, dir: Direction) -> bool {
        if !self.contains(cell) {
            return true;
        }
        self.cells[self.index(cell)].get(dir)
    }

    /// Whether a token standing on `cell` may step one cell in `dir`.
    /// False when the target would leave the grid or a wall blocks the way.
    pub fn is_move_valid(&self, cell: Cell, dir: Direction) -> bool {
        self.step(cell, dir).is_some()
    }

    /// The cell a valid move in `dir` lands on: the neighbor, provided the
    /// shared wall has been carved away.
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        if self.has_wall(cell, dir) {
            return None;
        }
        self.neighbor(cell, dir)
    }

    /// Number of carved wall pairs. `size² − 1` for any generated maze.
    pub fn passage_count(&self) -> usize {
        let mut open = 0;
        for y in 0..self.size {
            for x in 0..self.size {
                let cell = Cell::new(x, y);
                if cell.x + 1 < self.size && !self.has_wall(cell, Direction::East) {
                    open += 1;
                }
                if cell.y + 1 < self.size && !self.has_wall(cell, Direction::South) {
                    open += 1;
                }
            }
        }
        open
    }

    /// Remove the wall pair between `cell` and its neighbor in `dir`.
    /// Both sides are updated so the symmetry invariant holds.
    pub(crate) fn carve(&mut self, cell: Cell, dir: Direction) {
        if let Some(next) = self.neighbor(cell, dir) {
            let i = self.index(cell);
            let j = self.index(next);
            self.cells[i].clear(dir);
            self.cells[j].clear(dir.opposite());
        }
    }
}

//! Breadth-first searches over a generated maze
//!
//! Both queries expand edges in the fixed up/right/down/left order, which
//! pins down tie-breaking: equal-length paths and equal-distance cells
//! resolve the same way on every run.

use std::collections::VecDeque;

use super::grid::{Cell, Direction, Grid};

/// Shortest path from `start` to `goal`, both endpoints included.
///
/// On a spanning-tree maze this is the unique simple path between the two
/// cells. If `goal` cannot be reached (a malformed grid, which cannot happen for
/// a generated one) the result degenerates to `[start]`; that is a
/// data-integrity bug in the caller's grid, not a runtime condition worth
/// an error type.
pub fn shortest_path(grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
    if !grid.contains(start) || !grid.contains(goal) {
        log::warn!("shortest_path with out-of-bounds endpoints {start:?} -> {goal:?}");
        return vec![start];
    }
    if start == goal {
        return vec![start];
    }

    let cells = grid.size() * grid.size();
    let mut visited = vec![false; cells];
    let mut parent: Vec<Option<Cell>> = vec![None; cells];
    let mut queue = VecDeque::new();

    visited[grid.index(start)] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return reconstruct(&parent, grid, start, goal);
        }
        for dir in Direction::ALL {
            let Some(next) = grid.step(cell, dir) else {
                continue;
            };
            let idx = grid.index(next);
            if !visited[idx] {
                visited[idx] = true;
                parent[idx] = Some(cell);
                queue.push_back(next);
            }
        }
    }

    log::warn!("maze is disconnected: no path {start:?} -> {goal:?}");
    vec![start]
}

/// The first cell whose BFS distance from `start` strictly exceeds every
/// distance seen before it, i.e. some cell at maximum graph distance.
///
/// Used to drop the fish as far from the player as the maze allows. The
/// tie-break among equally distant cells is just enqueue order; nothing
/// downstream depends on which one wins.
pub fn furthest_cell(grid: &Grid, start: Cell) -> Cell {
    if !grid.contains(start) {
        log::warn!("furthest_cell from out-of-bounds {start:?}");
        return start;
    }

    let cells = grid.size() * grid.size();
    let mut visited = vec![false; cells];
    let mut queue = VecDeque::new();

    visited[grid.index(start)] = true;
    queue.push_back((start, 0u32));

    let mut furthest = start;
    let mut max_distance = 0;

    while let Some((cell, distance)) = queue.pop_front() {
        if distance > max_distance {
            max_distance = distance;
            furthest = cell;
        }
        for dir in Direction::ALL {
            let Some(next) = grid.step(cell, dir) else {
                continue;
            };
            let idx = grid.index(next);
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back((next, distance + 1));
            }
        }
    }

    furthest
}

fn reconstruct(parent: &[Option<Cell>], grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        match parent[grid.index(cursor)] {
            Some(prev) => {
                path.push(prev);
                cursor = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// 3×3 grid with every internal wall carved away.
    fn open_3x3() -> Grid {
        let mut grid = Grid::fully_walled(3);
        for y in 0..3 {
            for x in 0..3 {
                let cell = Cell::new(x, y);
                grid.carve(cell, Direction::East);
                grid.carve(cell, Direction::South);
            }
        }
        grid
    }

    /// 3×3 grid carved along a single snaking corridor from (0,0) to (0,2).
    fn corridor_3x3() -> Grid {
        let mut grid = Grid::fully_walled(3);
        let chain = [
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(2, 2),
            Cell::new(1, 2),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 2),
        ];
        for pair in chain.windows(2) {
            let dir = Direction::between(pair[0], pair[1]).unwrap();
            grid.carve(pair[0], dir);
        }
        grid
    }

    #[test]
    fn test_path_between_same_cell() {
        let mut rng = Pcg32::seed_from_u64(11);
        let grid = Grid::generate(5, &mut rng);
        let cell = Cell::new(2, 2);
        assert_eq!(shortest_path(&grid, cell, cell), vec![cell]);
    }

    #[test]
    fn test_open_grid_diagonal_path() {
        // With no internal walls the shortest route is Manhattan: 5 cells,
        // and the up/right/down/left tie-break walks east before south.
        let grid = open_3x3();
        let path = shortest_path(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_corridor_path_follows_the_carved_chain() {
        let grid = corridor_3x3();
        assert_eq!(grid.passage_count(), 8);
        // The only route from (0,0) to (0,2) is the full corridor
        let path = shortest_path(&grid, Cell::new(0, 0), Cell::new(0, 2));
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Cell::new(0, 0));
        assert_eq!(path[8], Cell::new(0, 2));
        // A shorter target keeps the known minimum hop count
        let path = shortest_path(&grid, Cell::new(0, 0), Cell::new(2, 0));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_path_is_walkable_and_adjacent() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let grid = Grid::generate(10, &mut rng);
        let path = shortest_path(&grid, Cell::new(0, 0), Cell::new(9, 9));
        assert!(path.len() >= 2);
        assert_eq!(path[0], Cell::new(0, 0));
        assert_eq!(*path.last().unwrap(), Cell::new(9, 9));
        for pair in path.windows(2) {
            let dir = Direction::between(pair[0], pair[1]).expect("path cells must be adjacent");
            assert!(grid.is_move_valid(pair[0], dir));
        }
    }

    #[test]
    fn test_furthest_cell_on_corridor() {
        let grid = corridor_3x3();
        // The corridor's far end is the unique maximum-distance cell
        assert_eq!(furthest_cell(&grid, Cell::new(0, 0)), Cell::new(0, 2));
        assert_eq!(furthest_cell(&grid, Cell::new(0, 2)), Cell::new(0, 0));
    }

    #[test]
    fn test_furthest_cell_reaches_max_distance() {
        let mut rng = Pcg32::seed_from_u64(99);
        let grid = Grid::generate(9, &mut rng);
        let start = Cell::new(0, 0);
        let far = furthest_cell(&grid, start);
        let far_distance = shortest_path(&grid, start, far).len();

        // No cell may be strictly further than the reported one
        for y in 0..9 {
            for x in 0..9 {
                let d = shortest_path(&grid, start, Cell::new(x, y)).len();
                assert!(d <= far_distance, "({x},{y}) is further than the fish cell");
            }
        }
    }

    #[test]
    fn test_furthest_cell_on_single_cell_grid() {
        let mut rng = Pcg32::seed_from_u64(5);
        let grid = Grid::generate(1, &mut rng);
        assert_eq!(furthest_cell(&grid, Cell::new(0, 0)), Cell::new(0, 0));
    }

    #[test]
    fn test_out_of_bounds_degenerates_to_start() {
        let mut rng = Pcg32::seed_from_u64(5);
        let grid = Grid::generate(4, &mut rng);
        let outside = Cell::new(40, 2);
        assert_eq!(shortest_path(&grid, outside, Cell::new(0, 0)), vec![outside]);
        assert_eq!(furthest_cell(&grid, outside), outside);
    }
}

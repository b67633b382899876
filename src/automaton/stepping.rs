//! Cellular automaton stepping with B3/S23 (Conway) rules.
//!
//! Both steppers read only from the current generation and write into a
//! fresh buffer, which replaces the grid's cells once every cell is done.

use rayon::prelude::*;

use super::grid::{cell_at, count_neighbors};
use crate::state::{CellState, Grid};

/// Apply the B3/S23 rule to one cell.
///
/// - Birth: an empty cell with exactly 3 neighbors becomes `Alive`
/// - Survival: an occupied cell with 2 or 3 neighbors keeps its kind
/// - Everything else becomes `Empty`
#[inline]
pub fn next_state(current: CellState, neighbors: u8) -> CellState {
    match (current.is_alive(), neighbors) {
        (true, 2 | 3) => current,
        (false, 3) => CellState::Alive,
        _ => CellState::Empty,
    }
}

#[inline]
fn next_cell(grid: &Grid, x: i32, y: i32) -> CellState {
    next_state(cell_at(grid, x, y), count_neighbors(grid, x, y))
}

/// Step the automaton forward by one generation on the calling thread.
pub fn step_automaton(grid: &mut Grid) {
    if grid.cells.is_empty() {
        return;
    }

    let mut next_cells = vec![CellState::Empty; grid.cells.len()];

    for y in 0..grid.size {
        for x in 0..grid.size {
            let idx = grid.index(x, y);
            next_cells[idx] = next_cell(grid, x, y);
        }
    }

    grid.cells = next_cells;
}

/// Step the automaton forward by one generation, computing rows on `pool`.
///
/// Produces exactly the same grid as [`step_automaton`]. Blocks until the
/// whole generation has been computed.
pub fn step_automaton_parallel(grid: &mut Grid, pool: &rayon::ThreadPool) {
    if grid.cells.is_empty() {
        return;
    }

    let size = grid.size as usize;
    let mut next_cells = vec![CellState::Empty; grid.cells.len()];
    let source: &Grid = grid;

    pool.install(|| {
        next_cells
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = next_cell(source, x as i32, y as i32);
                }
            });
    });

    grid.cells = next_cells;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::{create_grid, population, set_alive_at, set_cell_at};

    fn alive_cells(grid: &Grid) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..grid.size {
            for x in 0..grid.size {
                if cell_at(grid, x, y).is_alive() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_next_state_birth() {
        assert_eq!(next_state(CellState::Empty, 3), CellState::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Empty, n), CellState::Empty, "n={n}");
        }
    }

    #[test]
    fn test_next_state_survival() {
        assert_eq!(next_state(CellState::Alive, 2), CellState::Alive);
        assert_eq!(next_state(CellState::Alive, 3), CellState::Alive);
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Alive, n), CellState::Empty, "n={n}");
        }
    }

    #[test]
    fn test_next_state_virus_keeps_kind() {
        assert_eq!(next_state(CellState::Virus, 2), CellState::Virus);
        assert_eq!(next_state(CellState::Virus, 3), CellState::Virus);
        assert_eq!(next_state(CellState::Virus, 4), CellState::Empty);
    }

    #[test]
    fn test_step_blinker() {
        let mut grid = create_grid(5);
        set_alive_at(&mut grid, 1, 2);
        set_alive_at(&mut grid, 2, 2);
        set_alive_at(&mut grid, 3, 2);

        step_automaton(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);

        step_automaton(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_step_block_is_still_life() {
        let mut grid = create_grid(4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            set_alive_at(&mut grid, x, y);
        }
        let before = grid.clone();

        step_automaton(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_birth_in_corner() {
        // Three cells around the corner (0,0) give birth without wraparound help
        let mut grid = create_grid(4);
        set_alive_at(&mut grid, 1, 0);
        set_alive_at(&mut grid, 0, 1);
        set_alive_at(&mut grid, 1, 1);

        step_automaton(&mut grid);
        assert_eq!(cell_at(&grid, 0, 0), CellState::Alive);
    }

    #[test]
    fn test_step_empty_grid_stays_empty() {
        let mut grid = create_grid(6);
        step_automaton(&mut grid);
        assert_eq!(population(&grid), 0);

        let mut empty = create_grid(0);
        step_automaton(&mut empty);
        assert!(empty.cells.is_empty());
    }

    #[test]
    fn test_no_spontaneous_generation() {
        // A lone cell dies and nothing appears around it
        let mut grid = create_grid(5);
        set_alive_at(&mut grid, 2, 2);

        step_automaton(&mut grid);
        assert_eq!(population(&grid), 0);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        let mut serial = create_grid(33);
        // Deterministic scatter of alive and virus cells
        let mut lcg: u32 = 12345;
        for y in 0..33 {
            for x in 0..33 {
                lcg = lcg.wrapping_mul(1103515245).wrapping_add(12345);
                match (lcg >> 16) % 5 {
                    0 | 1 => set_alive_at(&mut serial, x, y),
                    2 => set_cell_at(&mut serial, x, y, CellState::Virus),
                    _ => {}
                }
            }
        }
        let mut parallel = serial.clone();

        for _ in 0..10 {
            step_automaton(&mut serial);
            step_automaton_parallel(&mut parallel, &pool);
            assert_eq!(serial, parallel);
        }
    }
}

//! Grid initialization and cell access helpers.
//!
//! Every accessor takes signed coordinates and clamps silently: reads outside
//! the grid yield `Empty`, writes outside the grid are dropped.

use crate::config::MAX_GRID_SIZE;
use crate::state::{CellState, Grid};

/// Create an empty `size` x `size` grid. `size` is clamped to
/// `0..=MAX_GRID_SIZE`, so negative sizes produce an empty grid.
pub fn create_grid(size: i32) -> Grid {
    let size = size.clamp(0, MAX_GRID_SIZE);
    let len = size as usize * size as usize;
    Grid {
        size,
        cells: vec![CellState::Empty; len],
    }
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(grid: &Grid, x: i32, y: i32) -> usize {
    grid.index(x, y)
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: i32, y: i32) -> bool {
    x >= 0 && x < grid.size && y >= 0 && y < grid.size
}

/// Get a cell, or `Empty` when out of bounds.
#[inline]
pub fn cell_at(grid: &Grid, x: i32, y: i32) -> CellState {
    if in_bounds(grid, x, y) {
        grid.cells[index_of(grid, x, y)]
    } else {
        CellState::Empty
    }
}

/// Overwrite a cell. Out-of-bounds writes are ignored.
pub fn set_cell_at(grid: &mut Grid, x: i32, y: i32, state: CellState) {
    if in_bounds(grid, x, y) {
        let idx = index_of(grid, x, y);
        grid.cells[idx] = state;
    }
}

/// Mark a cell `Alive`.
pub fn set_alive_at(grid: &mut Grid, x: i32, y: i32) {
    set_cell_at(grid, x, y, CellState::Alive);
}

/// Mark a single cell `Empty`.
pub fn clear_cell_at(grid: &mut Grid, x: i32, y: i32) {
    set_cell_at(grid, x, y, CellState::Empty);
}

/// Reset every cell to `Empty`. Dimensions are unchanged.
pub fn clear_all(grid: &mut Grid) {
    grid.cells.fill(CellState::Empty);
}

/// Number of occupied cells.
pub fn population(grid: &Grid) -> usize {
    grid.cells.iter().filter(|c| c.is_alive()).count()
}

/// Count occupied neighbors using the Moore neighborhood (8 neighbors).
/// Positions outside the grid count as empty; there is no wraparound.
pub fn count_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            // Skip the center cell
            if dx == 0 && dy == 0 {
                continue;
            }

            let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };

            if cell_at(grid, nx, ny).is_alive() {
                count += 1;
            }
        }
    }

    count
}

//! Region extraction and import operations.
//!
//! Renderers pull a rectangle of cells as bytes (see [`CellState::to_byte`])
//! instead of querying each cell across the C ABI.

use super::grid::index_of;
use crate::state::{CellState, Grid};

/// Clamp a half-open rectangle to the grid. `None` if nothing remains.
fn clamp_region(
    grid: &Grid,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> Option<(i32, i32, i32, i32)> {
    let min_x = min_x.clamp(0, grid.size);
    let min_y = min_y.clamp(0, grid.size);
    let max_x = max_x.clamp(0, grid.size);
    let max_y = max_y.clamp(0, grid.size);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    Some((min_x, min_y, max_x, max_y))
}

/// Extract a rectangular region from the grid into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest).
/// This order matches the order used by `import_region` for symmetry.
///
/// # Returns
/// Number of bytes written to the buffer, or 0 if the clamped region is
/// empty or the buffer is too small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total_size = (max_x - min_x) as usize * (max_y - min_y) as usize;
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            out_buf[offset] = grid.cells[index_of(grid, x, y)].to_byte();
            offset += 1;
        }
    }

    offset as u64
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// # Layout
/// The buffer is expected to be in y,x order (matching `extract_region`).
/// Values decode with [`CellState::from_byte`].
///
/// # Returns
/// Number of bytes read from the buffer, or 0 on error.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total_size = (max_x - min_x) as usize * (max_y - min_y) as usize;
    if in_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            let idx = index_of(grid, x, y);
            grid.cells[idx] = CellState::from_byte(in_buf[offset]);
            offset += 1;
        }
    }

    offset as u64
}

//! Cell edits and cell queries.
//!
//! Out-of-bounds coordinates are silently ignored by writes and read as empty.

use crate::config::validate_size;
use crate::state::CellState;
use crate::Engine;

/// Marks a cell alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_set_alive(ptr: *mut Engine, x: i32, y: i32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_alive_at(x, y);
}

/// Writes a cell state (0 = empty, 1 = alive, 2 = virus; other non-zero values mean alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut Engine, x: i32, y: i32, state: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_cell_at(x, y, CellState::from_byte(state));
}

/// Marks a single cell empty.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_clear_cell(ptr: *mut Engine, x: i32, y: i32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear_cell_at(x, y);
}

/// Empties every cell and resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_clear_all(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear_all();
}

/// Replaces the grid with an empty `size` x `size` grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or size outside `1..=MAX_GRID_SIZE`).
/// The grid is left untouched on failure.
#[no_mangle]
pub unsafe extern "C" fn gol_resize(ptr: *mut Engine, size: i32) -> i32 {
    if ptr.is_null() || validate_size(size).is_err() {
        return 1;
    }
    (*ptr).resize(size);
    0
}

/// Gets a cell state (0 = empty, 1 = alive, 2 = virus).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const Engine, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).cell_at(x, y).to_byte()
}

/// Counts occupied cells among the 8 neighbors of (x, y).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_neighbor_count(ptr: *const Engine, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).neighbor_count(x, y)
}

/// Counts occupied cells in the whole grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_population(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_GRID_SIZE;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_new_grid_is_empty() {
        unsafe {
            let engine = lifecycle::gol_create(8, 0.1);
            for y in 0..8 {
                for x in 0..8 {
                    assert_eq!(gol_get_cell(engine, x, y), 0);
                }
            }
            assert_eq!(gol_population(engine), 0);
            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let engine = lifecycle::gol_create(8, 0.1);

            gol_set_alive(engine, 0, 0);
            assert_eq!(gol_get_cell(engine, 0, 0), 1);

            gol_set_cell(engine, 7, 7, 2);
            assert_eq!(gol_get_cell(engine, 7, 7), 2);

            gol_clear_cell(engine, 0, 0);
            assert_eq!(gol_get_cell(engine, 0, 0), 0);
            assert_eq!(gol_population(engine), 1);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let engine = lifecycle::gol_create(4, 0.1);

            assert_eq!(gol_get_cell(engine, -1, 0), 0);
            assert_eq!(gol_get_cell(engine, 4, 0), 0);

            // Should not crash
            gol_set_alive(engine, -1, 0);
            gol_set_alive(engine, 4, 0);
            gol_set_cell(engine, 0, 99, 1);
            assert_eq!(gol_population(engine), 0);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_neighbor_count_and_clear_all() {
        unsafe {
            let engine = lifecycle::gol_create(5, 0.1);
            gol_set_alive(engine, 1, 2);
            gol_set_alive(engine, 3, 2);
            gol_set_alive(engine, 2, 1);
            gol_set_alive(engine, 2, 3);

            assert_eq!(gol_neighbor_count(engine, 2, 2), 4);

            gol_clear_all(engine);
            assert_eq!(gol_population(engine), 0);
            assert_eq!(gol_neighbor_count(engine, 2, 2), 0);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_resize() {
        unsafe {
            let engine = lifecycle::gol_create(5, 0.1);
            gol_set_alive(engine, 1, 1);

            assert_eq!(gol_resize(engine, 12), 0);
            assert_eq!(lifecycle::gol_dimensions(engine), 12);
            assert_eq!(gol_get_cell(engine, 1, 1), 0);

            assert_eq!(gol_resize(engine, 0), 1);
            assert_eq!(gol_resize(engine, MAX_GRID_SIZE + 1), 1);
            assert_eq!(gol_resize(engine, i32::MAX), 1);
            assert_eq!(lifecycle::gol_dimensions(engine), 12);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            gol_set_alive(ptr::null_mut(), 0, 0); // Should not crash
            gol_set_cell(ptr::null_mut(), 0, 0, 1);
            gol_clear_cell(ptr::null_mut(), 0, 0);
            gol_clear_all(ptr::null_mut());
            assert_eq!(gol_resize(ptr::null_mut(), 8), 1);
            assert_eq!(gol_get_cell(ptr::null(), 0, 0), 0);
            assert_eq!(gol_neighbor_count(ptr::null(), 0, 0), 0);
            assert_eq!(gol_population(ptr::null()), 0);
        }
    }
}

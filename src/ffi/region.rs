//! Region extraction and import FFI functions.

use crate::Engine;

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest),
/// one byte per cell (0 = empty, 1 = alive, 2 = virus).
/// This matches the layout expected by `gol_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_extract_region(
    ptr: *const Engine,
    out_buf: *mut u8,
    buf_len: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, buf_len);
    (*ptr).extract_region(buf_slice, min_x, min_y, max_x, max_y)
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in y,x order (matching `gol_extract_region`).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `in_buf` must point to at least `buf_len` readable bytes, or be null
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_import_region(
    ptr: *mut Engine,
    in_buf: *const u8,
    buf_len: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts(in_buf, buf_len);
    (*ptr).import_region(buf_slice, min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::grid::{gol_get_cell, gol_set_alive, gol_set_cell};
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_extract_region() {
        unsafe {
            let engine = lifecycle::gol_create(8, 0.1);
            gol_set_alive(engine, 2, 2);
            gol_set_cell(engine, 3, 2, 2);

            let mut buffer = vec![0u8; 16];
            let written =
                gol_extract_region(engine, buffer.as_mut_ptr(), buffer.len(), 2, 2, 6, 6);

            assert_eq!(written, 16);
            assert_eq!(buffer[0], 1);
            assert_eq!(buffer[1], 2);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_extract_region_short_buffer() {
        unsafe {
            let engine = lifecycle::gol_create(8, 0.1);

            let mut buffer = vec![0u8; 4];
            let written =
                gol_extract_region(engine, buffer.as_mut_ptr(), buffer.len(), 0, 0, 8, 8);
            assert_eq!(written, 0);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let engine = lifecycle::gol_create(4, 0.1);

            let buffer = [1u8, 0, 0, 2];
            let read = gol_import_region(engine, buffer.as_ptr(), buffer.len(), 0, 0, 2, 2);

            assert_eq!(read, 4);
            assert_eq!(gol_get_cell(engine, 0, 0), 1);
            assert_eq!(gol_get_cell(engine, 1, 1), 2);

            lifecycle::gol_destroy(engine);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = [0u8; 4];
            assert_eq!(
                gol_extract_region(ptr::null(), buffer.as_mut_ptr(), 4, 0, 0, 2, 2),
                0
            );
            assert_eq!(
                gol_import_region(ptr::null_mut(), buffer.as_ptr(), 4, 0, 0, 2, 2),
                0
            );

            let engine = lifecycle::gol_create(4, 0.1);
            assert_eq!(
                gol_extract_region(engine, ptr::null_mut(), 4, 0, 0, 2, 2),
                0
            );
            assert_eq!(gol_import_region(engine, ptr::null(), 4, 0, 0, 2, 2), 0);
            lifecycle::gol_destroy(engine);
        }
    }
}

//! C FFI layer for native rendering shells.
//!
//! This module exports C ABI functions for use from C, raylib front ends or
//! LuaJIT FFI. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod stepping;

pub use grid::{
    gol_clear_all, gol_clear_cell, gol_get_cell, gol_neighbor_count, gol_population,
    gol_resize, gol_set_alive, gol_set_cell,
};
pub use lifecycle::{
    gol_create, gol_create_with_preset, gol_destroy, gol_dimensions, gol_get_generation,
};
pub use region::{gol_extract_region, gol_import_region};
pub use stepping::{
    gol_advance, gol_is_running, gol_pause, gol_resume, gol_step, gol_toggle_running,
};

//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for manipulating grid state,
//! stepping the automaton, pacing generations and extracting/importing regions.
//! The FFI layer in `ffi/` calls into [`Engine`], which owns all of it.

pub mod engine;
pub mod grid;
pub mod pacing;
pub mod region;
pub mod stepping;

pub use engine::{Engine, RunState};
pub use grid::{
    cell_at, clear_all, clear_cell_at, count_neighbors, create_grid, in_bounds, index_of,
    population, set_alive_at, set_cell_at,
};
pub use pacing::TickGate;
pub use region::{extract_region, import_region};
pub use stepping::{next_state, step_automaton, step_automaton_parallel};
